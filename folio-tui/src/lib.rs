//! Folio TUI — the portfolio page rendered in a terminal.
//!
//! - `app`: page state, focus, scrolling and unit lifecycles
//! - `page`: composes the page into styled lines with section anchors
//! - `ui`: navigation bar, scrolling body, status bar, help overlay
//! - `input`: keyboard and mouse-wheel dispatch
//! - `cli` / `logging`: binary-edge concerns

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod page;
pub mod theme;
pub mod ui;

pub use app::AppState;
