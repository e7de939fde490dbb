//! Application state — single-owner, main-thread only.
//!
//! The page owns the immutable `Profile`. Every unit on it (counters, skill
//! card hover, timeline items) keeps only its own transient state and is
//! indexed in parallel with the profile record it renders.

use std::time::Instant;

use tracing::{debug, info, warn};

use folio_core::loader::ProfileSource;
use folio_core::{
    AnimatedCounter, CounterSpec, FrameQueue, FrameTime, HoverState, Profile, ScrollShade,
    Settings, TimelineItem,
};

use crate::page::{self, Anchors};

/// Page sections a navigation item can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Stats,
    Skills,
    Experience,
}

impl Section {
    /// Section targeted by a navigation label, matched case-insensitively.
    pub fn for_nav_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "about" => Some(Section::About),
            "skills" | "expertise" => Some(Section::Skills),
            "experience" | "journey" => Some(Section::Experience),
            "patents" | "stats" => Some(Section::Stats),
            _ => None,
        }
    }
}

/// Keyboard focus. Entering a skill card or timeline entry hovers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav(usize),
    Skill(usize),
    Timeline(usize),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Monotonic host clock feeding `FrameTime`s to the units.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> FrameTime {
        let ms = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        FrameTime::from_millis(ms)
    }
}

/// Visible body of the page, measured on the last layout pass.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub total_lines: u16,
    pub anchors: Anchors,
}

impl Viewport {
    pub fn max_scroll(&self) -> u16 {
        self.total_lines.saturating_sub(self.height)
    }
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,

    // Content
    pub profile: Profile,
    pub source: ProfileSource,
    pub settings: Settings,

    // Units
    pub frames: FrameQueue,
    pub counters: Vec<AnimatedCounter>,
    pub skill_cards: Vec<HoverState>,
    pub timeline: Vec<TimelineItem>,
    pub shade: ScrollShade,

    // Viewport
    pub scroll: u16,
    pub viewport: Viewport,

    // Cross-cutting
    pub focus: Option<Focus>,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(profile: Profile, source: ProfileSource, settings: Settings) -> Self {
        let mut frames = FrameQueue::new();
        let counters = create_counters(&profile, settings.animation.duration_ms, &mut frames);
        let shade = ScrollShade::new(settings.scroll.shade_threshold);
        Self {
            running: true,
            skill_cards: vec![HoverState::default(); profile.skills.len()],
            timeline: vec![TimelineItem::new(); profile.timeline.len()],
            profile,
            source,
            settings,
            frames,
            counters,
            shade,
            scroll: 0,
            viewport: Viewport::default(),
            focus: None,
            overlay: Overlay::None,
            status_message: None,
        }
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Deliver this repaint's frame to every counter.
    pub fn tick(&mut self, now: FrameTime) {
        if !self.frames.has_pending() {
            return;
        }
        let due = self.frames.begin_frame();
        for counter in &mut self.counters {
            counter.on_frame(&due, now, &mut self.frames);
        }
    }

    pub fn counter_spec(&self, value: u64) -> CounterSpec {
        CounterSpec::new(value, self.settings.animation.duration_ms)
    }

    /// Tear down and re-create every counter so they count up again.
    pub fn replay_counters(&mut self) {
        for counter in self.counters.drain(..) {
            counter.on_destroy(&mut self.frames);
        }
        self.counters = create_counters(
            &self.profile,
            self.settings.animation.duration_ms,
            &mut self.frames,
        );
        debug!(count = self.counters.len(), "counters replayed");
        self.set_status("Replaying counters");
    }

    // ── Profile ──────────────────────────────────────────────────────

    /// Re-read the profile file. On failure the current profile stays.
    pub fn reload_profile(&mut self) {
        if !self.source.is_file() {
            self.set_warning("Using the built-in profile; nothing to reload");
            return;
        }
        match self.source.load() {
            Ok(profile) => {
                self.apply_profile(profile);
                info!(source = %self.source, "profile reloaded");
                self.set_status(format!("Reloaded {}", self.source));
            }
            Err(e) => {
                warn!(error = %e, "profile reload failed");
                self.set_error(e.to_string());
            }
        }
    }

    /// Swap in new content, keeping unit state where the shape allows.
    ///
    /// Counters whose value changed restart from zero; unchanged ones keep
    /// running. Timeline expand state survives only if the entry count is
    /// unchanged.
    pub fn apply_profile(&mut self, profile: Profile) {
        let duration = self.settings.animation.duration_ms;

        let mut kept = Vec::with_capacity(profile.stats.len());
        let mut old = std::mem::take(&mut self.counters).into_iter();
        for stat in &profile.stats {
            let spec = CounterSpec::new(stat.value, duration);
            match old.next() {
                Some(mut counter) => {
                    counter.on_spec_changed(spec, &mut self.frames);
                    kept.push(counter);
                }
                None => kept.push(AnimatedCounter::on_create(spec, &mut self.frames)),
            }
        }
        for surplus in old {
            surplus.on_destroy(&mut self.frames);
        }
        self.counters = kept;

        if profile.timeline.len() != self.timeline.len() {
            self.timeline = vec![TimelineItem::new(); profile.timeline.len()];
        }
        self.skill_cards
            .resize(profile.skills.len(), HoverState::default());
        self.profile = profile;

        if !self.focus_is_valid() {
            self.focus = None;
        }
        match self.focus {
            Some(Focus::Skill(i)) => self.skill_cards[i].on_enter(),
            Some(Focus::Timeline(i)) => self.timeline[i].marker.on_enter(),
            _ => {}
        }
        self.relayout();
    }

    // ── Viewport ─────────────────────────────────────────────────────

    /// Measure the page at the given body size and clamp the scroll offset.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.relayout();
    }

    fn relayout(&mut self) {
        let (total, anchors) = {
            let page = page::compose(self, self.viewport.width);
            (page.total_lines(), page.anchors)
        };
        self.viewport.total_lines = total;
        self.viewport.anchors = anchors;
        self.scroll_to(self.scroll);
    }

    pub fn scroll_to(&mut self, line: u16) {
        self.scroll = line.min(self.viewport.max_scroll());
        if self.shade.on_scroll(self.scroll) {
            debug!(scrolled = self.shade.is_scrolled(), offset = self.scroll, "nav shade changed");
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(target as u16);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport.height.max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport.height.max(1)));
    }

    pub fn jump_to(&mut self, section: Section) {
        let a = &self.viewport.anchors;
        let line = match section {
            Section::About => a.about,
            Section::Stats => a.stats,
            Section::Skills => a.skills,
            Section::Experience => a.experience,
        };
        self.scroll_to(line);
    }

    /// Scroll just enough to bring `line` into view.
    fn reveal(&mut self, line: u16) {
        let height = self.viewport.height.max(1);
        if line < self.scroll {
            self.scroll_to(line);
        } else if line >= self.scroll.saturating_add(height) {
            self.scroll_to(line.saturating_sub(height / 3));
        }
    }

    // ── Focus & hover ────────────────────────────────────────────────

    fn focus_order(&self) -> Vec<Focus> {
        (0..self.profile.nav_items.len())
            .map(Focus::Nav)
            .chain((0..self.profile.skills.len()).map(Focus::Skill))
            .chain((0..self.profile.timeline.len()).map(Focus::Timeline))
            .collect()
    }

    fn focus_is_valid(&self) -> bool {
        match self.focus {
            None => true,
            Some(Focus::Nav(i)) => i < self.profile.nav_items.len(),
            Some(Focus::Skill(i)) => i < self.skill_cards.len(),
            Some(Focus::Timeline(i)) => i < self.timeline.len(),
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        if order.is_empty() {
            return;
        }
        let current = self.focus.and_then(|f| order.iter().position(|o| *o == f));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => order.len() - 1,
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
        };
        self.set_focus(Some(order[next]));
    }

    /// Move focus and scroll the newly focused element into view.
    pub fn set_focus(&mut self, focus: Option<Focus>) {
        self.move_focus(focus);
        let anchors = &self.viewport.anchors;
        let line = match focus {
            Some(Focus::Skill(i)) => anchors.skill_cards.get(i).copied(),
            Some(Focus::Timeline(i)) => anchors.timeline.get(i).copied(),
            _ => None,
        };
        if let Some(line) = line {
            self.reveal(line);
        }
    }

    /// Fire leave on the old element and enter on the new one.
    fn move_focus(&mut self, focus: Option<Focus>) {
        match self.focus {
            Some(Focus::Skill(i)) => self.skill_cards[i].on_leave(),
            Some(Focus::Timeline(i)) => self.timeline[i].marker.on_leave(),
            _ => {}
        }
        self.focus = focus;
        match focus {
            Some(Focus::Skill(i)) => self.skill_cards[i].on_enter(),
            Some(Focus::Timeline(i)) => self.timeline[i].marker.on_enter(),
            _ => {}
        }
    }

    /// Pointer moved onto a page line (`None`: off the page). Hovers the
    /// card or entry under it without scrolling. Nav focus is left alone
    /// when the pointer is over nothing.
    pub fn pointer_at(&mut self, line: Option<u16>) {
        let target = line.and_then(|l| self.viewport.anchors.element_at(l));
        match (target, self.focus) {
            (Some(t), current) if current != Some(t) => self.move_focus(Some(t)),
            (None, Some(Focus::Skill(_) | Focus::Timeline(_))) => self.move_focus(None),
            _ => {}
        }
    }

    /// Left click on a page line. Only timeline toggles react.
    pub fn click_at(&mut self, line: u16) {
        if let Some(i) = self.viewport.anchors.toggle_at(line) {
            self.toggle_timeline(i);
        }
    }

    /// Enter/Space on the focused element.
    pub fn activate(&mut self) {
        match self.focus {
            Some(Focus::Nav(i)) => self.activate_nav(i),
            Some(Focus::Timeline(i)) => self.toggle_timeline(i),
            Some(Focus::Skill(_)) | None => {}
        }
    }

    pub fn activate_nav(&mut self, index: usize) {
        let Some(label) = self.profile.nav_items.get(index).cloned() else {
            return;
        };
        match Section::for_nav_label(&label) {
            Some(section) => {
                self.jump_to(section);
                debug!(?section, "nav jump");
            }
            None => self.set_warning(format!("No section for \"{label}\"")),
        }
    }

    pub fn toggle_timeline(&mut self, index: usize) {
        if let Some(item) = self.timeline.get_mut(index) {
            item.toggle();
        }
        // Expanding changes the page height.
        self.relayout();
    }

    // ── Status ───────────────────────────────────────────────────────

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

fn create_counters(
    profile: &Profile,
    duration_ms: u64,
    frames: &mut FrameQueue,
) -> Vec<AnimatedCounter> {
    profile
        .stats
        .iter()
        .map(|s| AnimatedCounter::on_create(CounterSpec::new(s.value, duration_ms), frames))
        .collect()
}
