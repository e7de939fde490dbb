//! "Professional Journey": the expandable career timeline.
//!
//! Each entry hangs off a vertical gutter:
//!
//! ```text
//!   ● 2016 - Present
//!   │ Founder and CEO
//!   │ FASTDATA.io, Inc.
//!   │ Leading the development of ...
//!   │ [ Show More ]
//! ```

use ratatui::text::{Line, Span};

use crate::app::{AppState, Focus};
use crate::theme;

use super::{Anchors, PageBuilder};

/// Records the first line and the toggle line of each entry.
pub fn compose(b: &mut PageBuilder, app: &AppState, anchors: &mut Anchors) {
    b.heading("Professional Journey");

    let gutter = || vec![Span::raw("  "), Span::styled("│ ", theme::accent())];
    anchors.timeline = Vec::with_capacity(app.profile.timeline.len());
    anchors.timeline_toggles = Vec::with_capacity(app.profile.timeline.len());

    for (i, entry) in app.profile.timeline.iter().enumerate() {
        let item = app.timeline.get(i).copied().unwrap_or_default();
        let view = item.view(entry);

        let marker = if item.marker.is_hovered() {
            Span::styled("◉ ", theme::accent_bold())
        } else {
            Span::styled("● ", theme::accent())
        };
        anchors.timeline.push(b.mark());
        b.push(Line::from(vec![
            Span::raw("  "),
            marker,
            Span::styled(view.period.to_string(), theme::light()),
        ]));
        b.wrapped(&gutter(), view.role, theme::title());
        b.wrapped(&gutter(), view.organization, theme::accent());
        b.wrapped(&gutter(), view.summary, theme::body());

        let toggle_style = if app.focus == Some(Focus::Timeline(i)) {
            theme::focused(theme::accent_bold())
        } else {
            theme::accent_bold()
        };
        let mut toggle = gutter();
        toggle.push(Span::styled(format!("[ {} ]", view.toggle_label), toggle_style));
        anchors.timeline_toggles.push(b.mark());
        b.push(Line::from(toggle));

        if let Some(achievements) = view.achievements {
            b.push(Line::from(gutter()));
            let mut heading = gutter();
            heading.push(Span::styled("Key Achievements:", theme::title()));
            b.push(Line::from(heading));
            for achievement in achievements {
                let mut first = gutter();
                first.push(Span::styled("• ", theme::accent()));
                let mut rest = gutter();
                rest.push(Span::raw("  "));
                b.hanging(&first, &rest, achievement, theme::body());
            }
        }
        if let Some(technologies) = view.technologies {
            b.push(Line::from(gutter()));
            let mut heading = gutter();
            heading.push(Span::styled("Technologies Used:", theme::title()));
            b.push(Line::from(heading));
            b.chips(&gutter(), technologies, theme::chip());
        }
        b.blank();
    }
}
