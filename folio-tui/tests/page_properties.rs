//! Property tests for page layout invariants.
//!
//! 1. Wrapping never exceeds the width and never loses words
//! 2. Scrolling always stays within `[0, lines - viewport]`
//! 3. The shade tracks the scroll offset against the threshold

use proptest::prelude::*;

use folio_core::loader::ProfileSource;
use folio_core::{Profile, Settings};
use folio_tui::app::AppState;
use folio_tui::page::wrap;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z$+.-]{1,14}", 0..30).prop_map(|words| words.join(" "))
}

#[derive(Debug, Clone)]
enum ScrollOp {
    By(i32),
    To(u16),
    PageDown,
    PageUp,
}

fn arb_scroll_op() -> impl Strategy<Value = ScrollOp> {
    prop_oneof![
        (-50..50i32).prop_map(ScrollOp::By),
        any::<u16>().prop_map(ScrollOp::To),
        Just(ScrollOp::PageDown),
        Just(ScrollOp::PageUp),
    ]
}

// ── 1. Wrapping ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrap_fits_width(text in arb_text(), width in 1usize..60) {
        for line in wrap(&text, width) {
            prop_assert!(line.chars().count() <= width);
        }
    }

    /// Joining the wrapped lines gives back the same characters.
    #[test]
    fn wrap_keeps_content(text in arb_text(), width in 15usize..60) {
        let joined = wrap(&text, width).join(" ");
        prop_assert_eq!(joined, text);
    }
}

// ── 2. Scroll clamping / 3. Shade ────────────────────────────────────

proptest! {
    #[test]
    fn scroll_stays_in_bounds(
        width in 20u16..160,
        height in 1u16..60,
        ops in prop::collection::vec(arb_scroll_op(), 1..40),
    ) {
        let mut app =
            AppState::new(Profile::builtin(), ProfileSource::Builtin, Settings::default());
        app.set_viewport(width, height);
        let threshold = app.shade.threshold();
        for op in ops {
            match op {
                ScrollOp::By(d) => app.scroll_by(d),
                ScrollOp::To(line) => app.scroll_to(line),
                ScrollOp::PageDown => app.page_down(),
                ScrollOp::PageUp => app.page_up(),
            }
            prop_assert!(app.scroll <= app.viewport.max_scroll());
            prop_assert_eq!(app.shade.is_scrolled(), app.scroll > threshold);
        }
    }
}
