//! Expandable timeline entry — a two-state unit over an immutable record.
//!
//! The unit owns only its `ExpandState`. Rendering goes through
//! `TimelineView`, a view model listing exactly what is visible in the
//! current state; renderers turn it into lines without re-deciding anything.

use tracing::debug;

use crate::domain::TimelineEntry;
use crate::hover::HoverState;

/// Collapsed shows the header and summary; Expanded adds the detail lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    pub fn toggled(self) -> Self {
        match self {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ExpandState::Expanded
    }

    /// Label of the toggle control in this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ExpandState::Collapsed => "Show More",
            ExpandState::Expanded => "Show Less",
        }
    }
}

/// Transient interaction state for one rendered timeline entry.
///
/// Holds no content: the entry is passed in at render time, so the page
/// keeps sole ownership of its records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineItem {
    expand: ExpandState,
    /// Hover over the timeline marker.
    pub marker: HoverState,
}

impl TimelineItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unit's one user action.
    pub fn toggle(&mut self) {
        self.expand = self.expand.toggled();
        debug!(expanded = self.expand.is_expanded(), "timeline entry toggled");
    }

    pub fn expand_state(&self) -> ExpandState {
        self.expand
    }

    pub fn view<'a>(&self, entry: &'a TimelineEntry) -> TimelineView<'a> {
        TimelineView::new(entry, self.expand)
    }
}

/// What an entry shows in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineView<'a> {
    pub period: &'a str,
    pub role: &'a str,
    pub organization: &'a str,
    pub summary: &'a str,
    pub toggle_label: &'static str,
    /// `Some` only when expanded. May be an empty slice.
    pub achievements: Option<&'a [String]>,
    /// `Some` only when expanded and the entry lists technologies.
    pub technologies: Option<&'a [String]>,
}

impl<'a> TimelineView<'a> {
    pub fn new(entry: &'a TimelineEntry, state: ExpandState) -> Self {
        let expanded = state.is_expanded();
        Self {
            period: &entry.period,
            role: &entry.role,
            organization: &entry.organization,
            summary: &entry.summary,
            toggle_label: state.toggle_label(),
            achievements: expanded.then_some(entry.achievements.as_slice()),
            technologies: if expanded {
                entry.technologies.as_deref()
            } else {
                None
            },
        }
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.map_or(0, <[String]>::len)
    }

    pub fn technology_count(&self) -> usize {
        self.technologies.map_or(0, <[String]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(achievements: usize, technologies: Option<usize>) -> TimelineEntry {
        TimelineEntry {
            period: "2001 - 2004".into(),
            role: "CTO".into(),
            organization: "Tradeware".into(),
            summary: "Trading systems".into(),
            achievements: (0..achievements).map(|i| format!("a{i}")).collect(),
            technologies: technologies.map(|n| (0..n).map(|i| format!("t{i}")).collect()),
        }
    }

    #[test]
    fn starts_collapsed() {
        let item = TimelineItem::new();
        assert_eq!(item.expand_state(), ExpandState::Collapsed);
        assert!(!item.marker.is_hovered());
    }

    #[test]
    fn collapsed_then_expanded_counts() {
        let e = entry(4, Some(3));
        let mut item = TimelineItem::new();

        let v = item.view(&e);
        assert_eq!(v.achievement_count(), 0);
        assert_eq!(v.technology_count(), 0);
        assert_eq!(v.toggle_label, "Show More");
        assert_eq!(v.period, "2001 - 2004");

        item.toggle();
        let v = item.view(&e);
        assert_eq!(v.achievement_count(), 4);
        assert_eq!(v.technology_count(), 3);
        assert_eq!(v.toggle_label, "Show Less");
    }

    #[test]
    fn double_toggle_restores_view() {
        let e = entry(2, Some(1));
        let mut item = TimelineItem::new();
        let before = item.view(&e);
        item.toggle();
        item.toggle();
        assert_eq!(item.view(&e), before);
    }

    #[test]
    fn empty_achievements_render_empty_section() {
        let e = entry(0, None);
        let mut item = TimelineItem::new();
        item.toggle();
        let v = item.view(&e);
        assert_eq!(v.achievements, Some(&[][..]));
        assert_eq!(v.achievement_count(), 0);
    }

    #[test]
    fn missing_technologies_omit_section() {
        let e = entry(3, None);
        let mut item = TimelineItem::new();
        item.toggle();
        assert!(item.view(&e).technologies.is_none());
    }

    #[test]
    fn siblings_are_independent() {
        let mut a = TimelineItem::new();
        let b = TimelineItem::new();
        a.toggle();
        assert!(a.expand_state().is_expanded());
        assert!(!b.expand_state().is_expanded());
    }
}
