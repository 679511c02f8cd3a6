//! Carousel navigation state machine.
//!
//! One instance per carousel. Every input modality funnels into
//! [`CarouselState::go_to`], the single state-mutating primitive; the
//! embedded browser runtime mirrors these exact transitions.

/// Minimum horizontal displacement (device-independent pixels) for a touch
/// gesture to count as a swipe. Displacement at or below the threshold is
/// a no-op.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Arrow keys recognized while a carousel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Navigation inputs. Mouse wheel and drag are out of contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Click (or tap) on the previous button.
    PrevClick,
    /// Click (or tap) on the next button.
    NextClick,
    /// Click on the position indicator for a specific slide.
    Indicator(usize),
    /// Arrow key while the carousel has focus.
    Key(ArrowKey),
    /// Horizontal touch gesture; `delta_x` = end x − start x, so a swipe
    /// to the left (advancing) is negative.
    Swipe { delta_x: f64 },
}

/// Per-carousel navigation state.
///
/// Invariant: `current < len` at all times; exactly one slide (and its
/// indicator) is active, matching `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    /// Create state for a carousel with `len` slides, slide 0 active.
    ///
    /// Callers only construct this for containers holding at least one
    /// image; zero-image containers are skipped before this point.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel must have at least one slide");
        Self { len, current: 0 }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the active slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the slide at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Track translation magnitude: active index × 100% of viewport width.
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    /// The single state-mutating primitive.
    ///
    /// Out-of-range input is ignored; in-range input moves the active
    /// marker from the old slide to the new one.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.go_to((self.current + 1) % self.len);
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        self.go_to((self.current + self.len - 1) % self.len);
    }

    /// Funnel an input event into a navigation transition.
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::NextClick => self.next(),
            Input::PrevClick => self.prev(),
            Input::Indicator(i) => self.go_to(i),
            Input::Key(ArrowKey::Right) => self.next(),
            Input::Key(ArrowKey::Left) => self.prev(),
            Input::Swipe { delta_x } => {
                if delta_x < -SWIPE_THRESHOLD_PX {
                    self.next();
                } else if delta_x > SWIPE_THRESHOLD_PX {
                    self.prev();
                }
                // Below the threshold: no-op
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CarouselState::new(3);
        assert_eq!(state.current(), 0);
        assert_eq!(state.len(), 3);
        assert!(state.is_active(0));
        assert_eq!(state.offset_percent(), 0);
    }

    #[test]
    fn test_next_wraps_to_start() {
        let mut state = CarouselState::new(3);
        state.go_to(2);
        state.next();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut state = CarouselState::new(3);
        state.prev();
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn test_n_nexts_return_to_origin() {
        for n in 1..=5 {
            let mut state = CarouselState::new(n);
            for _ in 0..n {
                state.next();
            }
            assert_eq!(state.current(), 0, "wrap failed for len {n}");
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut state = CarouselState::new(3);
        state.go_to(1);
        state.go_to(3);
        assert_eq!(state.current(), 1);
        state.go_to(usize::MAX);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_offset_tracks_current() {
        let mut state = CarouselState::new(4);
        state.go_to(2);
        assert_eq!(state.offset_percent(), 200);
    }

    #[test]
    fn test_single_slide_navigation() {
        let mut state = CarouselState::new(1);
        state.next();
        assert_eq!(state.current(), 0);
        state.prev();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_click_inputs() {
        let mut state = CarouselState::new(3);
        state.handle(Input::NextClick);
        assert_eq!(state.current(), 1);
        state.handle(Input::PrevClick);
        assert_eq!(state.current(), 0);
        state.handle(Input::Indicator(2));
        assert_eq!(state.current(), 2);
        // Next from the last slide wraps around
        state.handle(Input::NextClick);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_key_inputs() {
        let mut state = CarouselState::new(2);
        state.handle(Input::Key(ArrowKey::Right));
        assert_eq!(state.current(), 1);
        state.handle(Input::Key(ArrowKey::Left));
        assert_eq!(state.current(), 0);
        state.handle(Input::Key(ArrowKey::Left));
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_swipe_below_threshold_is_noop() {
        let mut state = CarouselState::new(3);
        state.handle(Input::Swipe { delta_x: -49.0 });
        assert_eq!(state.current(), 0);
        state.handle(Input::Swipe { delta_x: 49.0 });
        assert_eq!(state.current(), 0);
        // Exactly at the threshold does not trigger either
        state.handle(Input::Swipe { delta_x: -50.0 });
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_swipe_beyond_threshold_steps_once() {
        let mut state = CarouselState::new(3);
        state.handle(Input::Swipe { delta_x: -51.0 });
        assert_eq!(state.current(), 1);
        state.handle(Input::Swipe { delta_x: 51.0 });
        assert_eq!(state.current(), 0);
    }
}
