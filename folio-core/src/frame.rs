//! One-shot frame scheduling with cancellable requests.
//!
//! A unit that wants to run on the next repaint calls `request_frame()` and
//! keeps the returned `CancelToken`. The host calls `begin_frame()` once per
//! repaint to take every request due now; requests made while handling that
//! frame land in the next one. Tearing a unit down cancels its token, so a
//! request can never be delivered to a unit that no longer exists.

use std::collections::BTreeSet;

/// Host timestamp in milliseconds from an arbitrary monotonic origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameTime(u64);

impl FrameTime {
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds since `earlier`, zero if the clock stepped backwards.
    pub fn saturating_since(self, earlier: FrameTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Handle to a single pending frame request.
///
/// Not `Clone`: a request is either delivered or cancelled, exactly once.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "dropping a CancelToken leaks the frame request"]
pub struct CancelToken(u64);

impl CancelToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Requests due in the frame currently being delivered.
#[derive(Debug, Default)]
pub struct DueFrames(BTreeSet<u64>);

impl DueFrames {
    pub fn contains(&self, token: &CancelToken) -> bool {
        self.0.contains(&token.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scheduling seam between units and whatever drives repaints.
pub trait FrameScheduler {
    /// Ask to be called on the next repaint.
    fn request_frame(&mut self) -> CancelToken;

    /// Withdraw a request. Cancelling an already delivered request is a no-op.
    fn cancel(&mut self, token: CancelToken);
}

/// In-process scheduler driven by the host's event loop.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: BTreeSet<u64>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every request due this frame.
    pub fn begin_frame(&mut self) -> DueFrames {
        DueFrames(std::mem::take(&mut self.pending))
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> CancelToken {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(id);
        CancelToken(id)
    }

    fn cancel(&mut self, token: CancelToken) {
        self.pending.remove(&token.0);
    }
}
