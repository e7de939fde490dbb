//! Footer: copyright line and the mail/LinkedIn contacts.

use chrono::Datelike;
use ratatui::text::{Line, Span};

use crate::app::AppState;
use crate::theme;

use super::PageBuilder;

pub fn compose(b: &mut PageBuilder, app: &AppState) {
    b.push(Line::from(Span::styled("─".repeat(b.width()), theme::muted())));
    b.blank();

    let year = chrono::Local::now().year();
    b.centered(vec![Span::styled(
        format!("© {year} {}. All rights reserved.", app.profile.name),
        theme::muted(),
    )]);

    let mut contacts = Vec::new();
    for (i, contact) in app.profile.footer_contacts().enumerate() {
        if i > 0 {
            contacts.push(Span::raw("    "));
        }
        contacts.push(Span::styled(theme::contact_glyph(contact.kind), theme::accent()));
        contacts.push(Span::raw(" "));
        contacts.push(Span::styled(contact.label.clone(), theme::body()));
    }
    if !contacts.is_empty() {
        b.centered(contacts);
    }
    b.blank();
}
