//! Hover state for skill cards and timeline markers. Style only.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState(bool);

impl HoverState {
    pub fn on_enter(&mut self) {
        self.0 = true;
    }

    pub fn on_leave(&mut self) {
        self.0 = false;
    }

    pub fn is_hovered(self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave() {
        let mut h = HoverState::default();
        assert!(!h.is_hovered());
        h.on_enter();
        h.on_enter();
        assert!(h.is_hovered());
        h.on_leave();
        assert!(!h.is_hovered());
    }
}
