//! "Technical Expertise": one card per skill group, skills as chips.

use ratatui::text::{Line, Span};

use crate::app::{AppState, Focus};
use crate::theme;

use super::PageBuilder;

/// Returns the first line of each card.
pub fn compose(b: &mut PageBuilder, app: &AppState) -> Vec<u16> {
    b.heading("Technical Expertise");

    let mut anchors = Vec::with_capacity(app.profile.skills.len());
    for (i, group) in app.profile.skills.iter().enumerate() {
        let hovered = app.skill_cards.get(i).is_some_and(|h| h.is_hovered());
        let (glyph, icon_style) = theme::icon(group.icon, hovered);
        let title_style = if app.focus == Some(Focus::Skill(i)) {
            theme::focused(theme::title())
        } else {
            theme::title()
        };

        anchors.push(b.mark());
        b.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(glyph, icon_style),
            Span::raw(" "),
            Span::styled(group.title.clone(), title_style),
        ]));
        b.chips(&[Span::raw("    ")], &group.skills, theme::chip());
        b.blank();
    }
    anchors
}
