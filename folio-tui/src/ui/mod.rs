//! Top-level UI layout — navigation bar, scrolling page, status bar.

pub mod help;
pub mod nav_bar;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::app::{AppState, Overlay};
use crate::page;
use crate::theme;

/// Rows taken by the navigation bar (item row plus shade border).
pub const NAV_HEIGHT: u16 = 2;

struct Areas {
    nav: Rect,
    body: Rect,
    scrollbar: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(rows[1]);
    Areas {
        nav: rows[0],
        body: cols[0],
        scrollbar: cols[1],
        status: rows[2],
    }
}

/// Area the page text is laid out in. The app measures the page against this
/// before each draw.
pub fn body_area(area: Rect) -> Rect {
    split(area).body
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let areas = split(f.area());

    let page = page::compose(app, areas.body.width);
    let body = Paragraph::new(page.lines).scroll((app.scroll, 0));
    f.render_widget(body, areas.body);

    if app.viewport.max_scroll() > 0 {
        let mut state = ScrollbarState::new(usize::from(app.viewport.max_scroll()))
            .position(usize::from(app.scroll));
        let bar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_style(theme::accent())
            .track_style(theme::muted());
        f.render_stateful_widget(bar, areas.scrollbar, &mut state);
    }

    // Drawn after the body so the shade sits on top of the page.
    nav_bar::render(f, areas.nav, app);
    status_bar::render(f, areas.status, app);

    match app.overlay {
        Overlay::Help => help::render(f, areas.body),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
