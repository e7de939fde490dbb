//! Animated counter — counts a displayed integer up to a target over a fixed
//! duration, one step per delivered frame.
//!
//! Lifecycle:
//! - `on_create` requests the first frame; the start time is the timestamp
//!   of that first frame.
//! - `on_frame` interpolates linearly and re-requests while time remains.
//! - `on_spec_changed` restarts from zero if the spec actually changed.
//! - `on_destroy` withdraws any outstanding request.
//!
//! Invariant: within one run the displayed value is non-decreasing and never
//! exceeds the target.

use tracing::debug;

use crate::frame::{CancelToken, DueFrames, FrameScheduler, FrameTime};

/// Default animation length.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Target and duration for one counter. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    target: u64,
    duration_ms: u64,
}

impl CounterSpec {
    /// Durations below 1 ms are clamped to 1 ms.
    pub fn new(target: u64, duration_ms: u64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn with_default_duration(target: u64) -> Self {
        Self::new(target, DEFAULT_DURATION_MS)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// `min(floor(target * elapsed / duration), target)`.
    pub fn value_at(&self, elapsed_ms: u64) -> u64 {
        let scaled =
            u128::from(self.target) * u128::from(elapsed_ms) / u128::from(self.duration_ms);
        // Bounded by target, which fits in u64.
        scaled.min(u128::from(self.target)) as u64
    }
}

/// Mutable part of a counter, reset whenever the spec changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub displayed: u64,
    pub started_at: Option<FrameTime>,
}

/// A single counter unit.
///
/// Tear it down with `on_destroy`. Dropping it instead leaves its request in
/// the scheduler until the next `begin_frame` takes it; nothing receives it.
#[derive(Debug)]
#[must_use = "a counter must be torn down with on_destroy"]
pub struct AnimatedCounter {
    spec: CounterSpec,
    state: CounterState,
    pending: Option<CancelToken>,
}

impl AnimatedCounter {
    pub fn on_create(spec: CounterSpec, scheduler: &mut dyn FrameScheduler) -> Self {
        debug!(target_value = spec.target, duration_ms = spec.duration_ms, "counter created");
        Self {
            spec,
            state: CounterState::default(),
            pending: Some(scheduler.request_frame()),
        }
    }

    /// Restart from zero with `new_spec`. Identical specs leave the run alone.
    pub fn on_spec_changed(&mut self, new_spec: CounterSpec, scheduler: &mut dyn FrameScheduler) {
        if new_spec == self.spec {
            return;
        }
        debug!(
            from = self.spec.target,
            to = new_spec.target,
            "counter spec changed, restarting"
        );
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.spec = new_spec;
        self.state = CounterState::default();
        self.pending = Some(scheduler.request_frame());
    }

    /// Advance the animation if this counter's request is due.
    ///
    /// Frames that are not addressed to this counter, including any that
    /// arrive after it finished, change nothing.
    pub fn on_frame(
        &mut self,
        due: &DueFrames,
        now: FrameTime,
        scheduler: &mut dyn FrameScheduler,
    ) {
        match &self.pending {
            Some(token) if due.contains(token) => {}
            _ => return,
        }
        self.pending = None;

        let start = *self.state.started_at.get_or_insert(now);
        let elapsed = now.saturating_since(start);
        self.state.displayed = self.state.displayed.max(self.spec.value_at(elapsed));

        if elapsed < self.spec.duration_ms && self.state.displayed < self.spec.target {
            self.pending = Some(scheduler.request_frame());
        } else {
            debug!(target_value = self.spec.target, elapsed, "counter finished");
        }
    }

    /// Tear the unit down, withdrawing any outstanding frame request.
    pub fn on_destroy(mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
    }

    pub fn displayed(&self) -> u64 {
        self.state.displayed
    }

    pub fn spec(&self) -> CounterSpec {
        self.spec
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    /// True while a frame request is outstanding.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameQueue;

    fn tick(counter: &mut AnimatedCounter, q: &mut FrameQueue, ms: u64) {
        let due = q.begin_frame();
        counter.on_frame(&due, FrameTime::from_millis(ms), q);
    }

    #[test]
    fn dropped_counter_request_lasts_one_frame() {
        let mut q = FrameQueue::new();
        let counter = AnimatedCounter::on_create(CounterSpec::new(10, 100), &mut q);
        drop(counter);
        assert_eq!(q.pending_count(), 1);
        let due = q.begin_frame();
        assert_eq!(due.len(), 1);
        assert!(!q.has_pending());

        let counter = AnimatedCounter::on_create(CounterSpec::new(10, 100), &mut q);
        counter.on_destroy(&mut q);
        assert!(!q.has_pending());
    }

    #[test]
    fn duration_is_clamped() {
        assert_eq!(CounterSpec::new(10, 0).duration_ms(), 1);
        assert_eq!(CounterSpec::with_default_duration(10).duration_ms(), 2000);
    }

    #[test]
    fn value_at_floors_and_caps() {
        let spec = CounterSpec::new(25, 2000);
        assert_eq!(spec.value_at(0), 0);
        assert_eq!(spec.value_at(1000), 12);
        assert_eq!(spec.value_at(2000), 25);
        assert_eq!(spec.value_at(9_999), 25);
    }

    #[test]
    fn value_at_does_not_overflow() {
        let spec = CounterSpec::new(u64::MAX, 2000);
        assert_eq!(spec.value_at(u64::MAX), u64::MAX);
        assert_eq!(spec.value_at(1000), u64::MAX / 2);
    }

    #[test]
    fn scenario_twenty_five_over_two_seconds() {
        let mut q = FrameQueue::new();
        let mut c = AnimatedCounter::on_create(CounterSpec::new(25, 2000), &mut q);

        tick(&mut c, &mut q, 5_000);
        assert_eq!(c.displayed(), 0);
        assert_eq!(c.state().started_at, Some(FrameTime::from_millis(5_000)));

        tick(&mut c, &mut q, 6_000);
        assert_eq!(c.displayed(), 12);
        assert!(c.is_animating());

        tick(&mut c, &mut q, 7_000);
        assert_eq!(c.displayed(), 25);
        assert!(!c.is_animating());
        assert!(!q.has_pending());
    }

    #[test]
    fn zero_target_stops_after_first_frame() {
        let mut q = FrameQueue::new();
        let mut c = AnimatedCounter::on_create(CounterSpec::new(0, 2000), &mut q);
        tick(&mut c, &mut q, 0);
        assert_eq!(c.displayed(), 0);
        assert!(!c.is_animating());
        assert!(!q.has_pending());
    }

    #[test]
    fn late_frames_after_completion_are_ignored() {
        let mut q = FrameQueue::new();
        let mut c = AnimatedCounter::on_create(CounterSpec::new(3, 10), &mut q);
        tick(&mut c, &mut q, 0);
        tick(&mut c, &mut q, 50);
        assert_eq!(c.displayed(), 3);

        // Someone else's request arriving later must not restart anything.
        let other = q.request_frame();
        let due = q.begin_frame();
        assert!(due.contains(&other));
        c.on_frame(&due, FrameTime::from_millis(10_000), &mut q);
        assert_eq!(c.displayed(), 3);
        assert_eq!(c.state().started_at, Some(FrameTime::from_millis(0)));
        assert!(!q.has_pending());
    }

    #[test]
    fn backwards_clock_never_lowers_value() {
        let mut q = FrameQueue::new();
        let mut c = AnimatedCounter::on_create(CounterSpec::new(100, 1000), &mut q);
        tick(&mut c, &mut q, 1_000);
        tick(&mut c, &mut q, 1_500);
        assert_eq!(c.displayed(), 50);
        tick(&mut c, &mut q, 900);
        assert_eq!(c.displayed(), 50);
        assert!(c.is_animating());
    }

    #[test]
    fn spec_change_restarts_from_zero() {
        let mut q = FrameQueue::new();
        let mut c = AnimatedCounter::on_create(CounterSpec::new(100, 1000), &mut q);
        tick(&mut c, &mut q, 0);
        tick(&mut c, &mut q, 500);
        assert_eq!(c.displayed(), 50);

        c.on_spec_changed(CounterSpec::new(10, 1000), &mut q);
        assert_eq!(c.displayed(), 0);
        assert_eq!(c.state().started_at, None);
        assert_eq!(q.pending_count(), 1);

        tick(&mut c, &mut q, 600);
        assert_eq!(c.displayed(), 0);
        tick(&mut c, &mut q, 1_100);
        assert_eq!(c.displayed(), 5);
    }

    #[test]
    fn identical_spec_is_noop() {
        let mut q = FrameQueue::new();
        let spec = CounterSpec::new(100, 1000);
        let mut c = AnimatedCounter::on_create(spec, &mut q);
        tick(&mut c, &mut q, 0);
        tick(&mut c, &mut q, 500);

        c.on_spec_changed(spec, &mut q);
        assert_eq!(c.displayed(), 50);
        assert_eq!(c.state().started_at, Some(FrameTime::from_millis(0)));
        assert_eq!(q.pending_count(), 1);
    }

    #[test]
    fn destroy_withdraws_pending_request() {
        let mut q = FrameQueue::new();
        let mut c = AnimatedCounter::on_create(CounterSpec::new(100, 1000), &mut q);
        tick(&mut c, &mut q, 0);
        assert!(q.has_pending());
        c.on_destroy(&mut q);
        assert!(!q.has_pending());
    }

    #[test]
    fn destroy_before_first_frame() {
        let mut q = FrameQueue::new();
        let c = AnimatedCounter::on_create(CounterSpec::new(7, 1000), &mut q);
        assert_eq!(q.pending_count(), 1);
        c.on_destroy(&mut q);
        assert!(q.begin_frame().is_empty());
    }
}
