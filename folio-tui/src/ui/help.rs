//! Help overlay: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Scrolling");
    key(&mut lines, "j / k", "Scroll down / up");
    key(&mut lines, "PgDn / PgUp", "Scroll one screen");
    key(&mut lines, "g / G", "Top / bottom of the page");
    key(&mut lines, "Mouse wheel", "Scroll three rows");
    key(&mut lines, "Click", "Show More / Less, navigation items");
    lines.push(Line::from(""));

    section(&mut lines, "Page");
    key(&mut lines, "Tab / Shift+Tab", "Focus next / previous item");
    key(&mut lines, "Enter / Space", "Follow link or expand entry");
    key(&mut lines, "1-4", "Jump to a navigation section");
    key(&mut lines, "r", "Replay the counters");
    key(&mut lines, "R", "Reload the profile file");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Esc", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
