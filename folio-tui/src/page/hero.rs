//! Hero banner: name, headline and contact links on a deep-blue background.

use ratatui::text::Span;

use crate::app::AppState;
use crate::theme;

use super::PageBuilder;

const CONTACT_GAP: &str = "    ";

pub fn compose(b: &mut PageBuilder, app: &AppState) {
    let profile = &app.profile;
    let style = theme::hero();

    let deep = theme::theme().deep;

    b.filled(Vec::new(), style);
    b.filled(
        vec![Span::styled(format!("  {}", profile.name), theme::title().bg(deep))],
        style,
    );
    b.filled(
        vec![Span::styled(format!("  {}", profile.headline), theme::light().bg(deep))],
        style,
    );
    b.filled(Vec::new(), style);

    let contacts: Vec<Vec<Span<'static>>> = profile
        .contacts
        .iter()
        .map(|c| {
            vec![
                Span::styled(theme::contact_glyph(c.kind), theme::light().bg(deep)),
                Span::raw(" "),
                Span::styled(c.label.clone(), style),
            ]
        })
        .collect();

    let one_line: usize = 2
        + contacts
            .iter()
            .map(|c| c.iter().map(Span::width).sum::<usize>())
            .sum::<usize>()
        + CONTACT_GAP.len() * contacts.len().saturating_sub(1);

    if one_line <= b.width() {
        let mut spans = vec![Span::raw("  ")];
        for (i, contact) in contacts.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(CONTACT_GAP));
            }
            spans.extend(contact);
        }
        b.filled(spans, style);
    } else {
        for contact in contacts {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(contact);
            b.filled(spans, style);
        }
    }
    b.filled(Vec::new(), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::line_text;
    use folio_core::loader::ProfileSource;
    use folio_core::{Profile, Settings};

    fn lines(width: u16) -> Vec<String> {
        let app = AppState::new(Profile::builtin(), ProfileSource::Builtin, Settings::default());
        let mut b = PageBuilder::new(width);
        compose(&mut b, &app);
        b.lines.iter().map(line_text).collect()
    }

    #[test]
    fn wide_hero_puts_contacts_on_one_line() {
        let lines = lines(120);
        assert!(lines.iter().any(|l| l.contains("Alen Capalik")));
        assert!(lines.iter().any(|l| l.contains("Technology Leader & Innovator")));
        assert!(lines
            .iter()
            .any(|l| l.contains("alen@wiretap.net")
            && l.contains("310-310-9973")
            && l.contains("LinkedIn")));
    }

    #[test]
    fn narrow_hero_stacks_contacts() {
        let lines = lines(30);
        assert!(lines.iter().any(|l| l.contains("alen@wiretap.net") && !l.contains("LinkedIn")));
        assert!(lines.iter().any(|l| l.contains("310-310-9973")));
    }
}
