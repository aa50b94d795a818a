/// Auto-advance period for the embed carousel.
pub const EMBED_ROTATE_MS: u64 = 5000;
/// How many consecutive embeds are visible at once.
pub const EMBED_WINDOW: usize = 3;

/// Rotation state for the embed carousel. The timer calls `tick`; pointer
/// hover suspends advancement without stopping the timer, so resuming never
/// jumps more than one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    active: usize,
    hovered: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            hovered: false,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows and indicator dots only make sense with something to cycle.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Timer advancement; suppressed ticks are simply lost.
    pub fn tick(&mut self) {
        if self.hovered || self.len <= 1 {
            return;
        }
        self.active = (self.active + 1) % self.len;
    }

    /// Next arrow.
    pub fn advance(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.active = (self.active + 1) % self.len;
    }

    /// Previous arrow; wraps from the first item to the last.
    pub fn rewind(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.active = if self.active == 0 {
            self.len - 1
        } else {
            self.active - 1
        };
    }

    /// Indicator dot selection; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Up to `max` consecutive item indices starting at the active one,
    /// wrapping around the end of the list without repeats.
    pub fn window(&self, max: usize) -> Vec<usize> {
        (0..max.min(self.len))
            .map(|offset| (self.active + offset) % self.len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_advance_modulo_length() {
        let mut state = CarouselState::new(5);
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.active(), 3);
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.active(), 1);
    }

    #[test]
    fn hover_suspends_ticks_without_catch_up() {
        let mut state = CarouselState::new(5);
        state.tick();
        assert_eq!(state.active(), 1);

        state.set_hovered(true);
        state.tick();
        state.tick();
        assert_eq!(state.active(), 1);

        // resumes from where it stopped, one step per period
        state.set_hovered(false);
        state.tick();
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn rewind_wraps_from_zero() {
        let mut state = CarouselState::new(5);
        state.rewind();
        assert_eq!(state.active(), 4);
        state.rewind();
        assert_eq!(state.active(), 3);
    }

    #[test]
    fn manual_navigation_overrides_position() {
        let mut state = CarouselState::new(5);
        state.select(3);
        assert_eq!(state.active(), 3);
        state.advance();
        assert_eq!(state.active(), 4);
        state.select(7);
        assert_eq!(state.active(), 4);
        // the timer keeps running after manual navigation
        state.tick();
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn window_wraps_without_repeats() {
        let mut state = CarouselState::new(5);
        assert_eq!(state.window(3), vec![0, 1, 2]);
        state.select(4);
        assert_eq!(state.window(3), vec![4, 0, 1]);
    }

    #[test]
    fn window_never_exceeds_item_count() {
        let state = CarouselState::new(2);
        assert_eq!(state.window(3), vec![0, 1]);
        assert_eq!(CarouselState::new(0).window(3), Vec::<usize>::new());
    }

    #[test]
    fn single_item_carousel_is_static() {
        let mut state = CarouselState::new(1);
        assert!(!state.has_controls());
        state.tick();
        state.advance();
        state.rewind();
        assert_eq!(state.active(), 0);
        assert_eq!(state.window(3), vec![0]);
    }
}
