//! Navigation bar — monogram and section links, shaded once the page scrolls.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use folio_core::Profile;

use crate::app::{AppState, Focus};
use crate::theme;

const LEAD: &str = " ";
const AFTER_INITIALS: &str = "   ";
const GAP: &str = "  ";

fn item_label(index: usize, item: &str) -> String {
    format!("{} {item}", index + 1)
}

/// Columns each nav item occupies on the bar's first row.
pub fn item_columns(profile: &Profile) -> Vec<Range<u16>> {
    let width = |s: &str| Span::raw(s).width();
    let mut x = width(LEAD) + width(&profile.initials) + width(AFTER_INITIALS);
    let mut out = Vec::with_capacity(profile.nav_items.len());
    for (i, item) in profile.nav_items.iter().enumerate() {
        let end = x + width(&item_label(i, item));
        let clamp = |v: usize| u16::try_from(v).unwrap_or(u16::MAX);
        out.push(clamp(x)..clamp(end));
        x = end + width(GAP);
    }
    out
}

/// Nav item under a column, if any.
pub fn item_at(profile: &Profile, column: u16) -> Option<usize> {
    item_columns(profile).iter().position(|r| r.contains(&column))
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let scrolled = app.shade.is_scrolled();
    let style = theme::nav_bar(scrolled);

    let mut spans = vec![
        Span::raw(LEAD),
        Span::styled(app.profile.initials.clone(), theme::accent_bold()),
        Span::raw(AFTER_INITIALS),
    ];
    for (i, item) in app.profile.nav_items.iter().enumerate() {
        let item_style = if app.focus == Some(Focus::Nav(i)) {
            theme::focused(theme::light())
        } else {
            theme::light()
        };
        spans.push(Span::styled(item_label(i, item), item_style));
        spans.push(Span::raw(GAP));
    }

    let block = if scrolled {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::accent())
            .style(style)
    } else {
        Block::default().style(style)
    };
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_columns_follow_rendered_layout() {
        let profile = Profile::builtin();
        // " AC   1 About  2 Skills  3 Experience  4 Patents  "
        let cols = item_columns(&profile);
        assert_eq!(cols[0], 6..13);
        assert_eq!(cols[1], 15..23);
        assert_eq!(item_at(&profile, 6), Some(0));
        assert_eq!(item_at(&profile, 12), Some(0));
        assert_eq!(item_at(&profile, 13), None);
        assert_eq!(item_at(&profile, 16), Some(1));
        assert_eq!(item_at(&profile, 1), None);
    }
}
