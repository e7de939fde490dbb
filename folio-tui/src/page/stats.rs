//! Stats band: one animated counter per stat, rendered as "value+".

use ratatui::text::{Line, Span};

use crate::app::AppState;
use crate::theme;

use super::PageBuilder;

/// Below this many columns per stat the band is stacked instead.
const MIN_COLUMN_WIDTH: usize = 14;

pub fn compose(b: &mut PageBuilder, app: &AppState) {
    let stats = &app.profile.stats;
    b.blank();
    if stats.is_empty() {
        return;
    }

    let values: Vec<String> = stats
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let shown = app.counters.get(i).map_or(0, |c| c.displayed());
            format!("{shown}+")
        })
        .collect();

    let column = b.width() / stats.len();
    if column >= MIN_COLUMN_WIDTH {
        let icons = stats
            .iter()
            .map(|s| theme::icon(s.icon, false))
            .map(|(g, st)| (g.to_string(), st));
        let rows: [Vec<(String, ratatui::style::Style)>; 3] = [
            icons.collect(),
            values.iter().map(|v| (v.clone(), theme::accent_bold())).collect(),
            stats.iter().map(|s| (s.label.clone(), theme::muted())).collect(),
        ];
        for row in rows {
            b.push(columns(row, column));
        }
    } else {
        for (stat, value) in stats.iter().zip(&values) {
            let (glyph, style) = theme::icon(stat.icon, false);
            b.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(glyph, style),
                Span::raw(" "),
                Span::styled(value.clone(), theme::accent_bold()),
                Span::raw(" "),
                Span::styled(stat.label.clone(), theme::muted()),
            ]));
        }
    }
    b.blank();
}

/// Center each cell in a fixed-width column.
fn columns(cells: Vec<(String, ratatui::style::Style)>, column: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (text, style) in cells {
        let text: String = text.chars().take(column).collect();
        let w = text.chars().count();
        let left = (column - w) / 2;
        spans.push(Span::raw(" ".repeat(left)));
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" ".repeat(column - w - left)));
    }
    Line::from(spans)
}
