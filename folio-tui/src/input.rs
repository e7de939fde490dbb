//! Input dispatch — overlays → global keys → page keys.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, Overlay};
use crate::ui::{NAV_HEIGHT, nav_bar};

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_STEP: i32 = 3;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('r') => {
            app.replay_counters();
            return;
        }
        KeyCode::Char('R') => {
            app.reload_profile();
            return;
        }
        _ => {}
    }

    // 3. Page keys.
    handle_page_key(app, key);
}

/// Any key closes help.
fn handle_help_overlay(app: &mut AppState, _key: KeyEvent) {
    app.overlay = Overlay::None;
}

fn handle_page_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to(0),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to(u16::MAX),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
        }
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.profile.nav_items.len() {
                app.activate_nav(index);
            }
        }
        _ => {}
    }
}

/// Handle a mouse event: wheel scrolling, left clicks and pointer hover.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row < NAV_HEIGHT {
                if let Some(i) = nav_bar::item_at(&app.profile, mouse.column) {
                    app.activate_nav(i);
                }
            } else if let Some(line) = page_line(app, mouse.column, mouse.row) {
                app.click_at(line);
            }
        }
        MouseEventKind::Moved => {
            let line = page_line(app, mouse.column, mouse.row);
            app.pointer_at(line);
        }
        _ => {}
    }
}

/// Page line under a terminal cell, if the cell is inside the page body.
fn page_line(app: &AppState, column: u16, row: u16) -> Option<u16> {
    let body_row = row.checked_sub(NAV_HEIGHT)?;
    if column >= app.viewport.width || body_row >= app.viewport.height {
        return None;
    }
    let line = app.scroll.checked_add(body_row)?;
    (line < app.viewport.total_lines).then_some(line)
}
