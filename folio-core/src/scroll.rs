//! Navigation shade: derived from the vertical scroll offset.

/// Offset past which the navigation bar is drawn shaded.
pub const DEFAULT_SHADE_THRESHOLD: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollShade {
    threshold: u16,
    scrolled: bool,
}

impl Default for ScrollShade {
    fn default() -> Self {
        Self::new(DEFAULT_SHADE_THRESHOLD)
    }
}

impl ScrollShade {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Feed the current offset. Returns true if the shade flipped.
    pub fn on_scroll(&mut self, offset: u16) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }
}
