//! Held-frame counting for the place and remove buttons.

/// How long an action button has been held.
///
/// The driver only reports whether a button is down each frame. Placement
/// debouncing lives in the targeting latch, so the only thing kept here is
/// the run length: zero while released, then 1, 2, ... for each consecutive
/// held frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    held_frames: u32,
}

impl ButtonState {
    pub const RELEASED: Self = Self { held_frames: 0 };

    /// A button that has been held for `frames` consecutive frames.
    #[inline]
    #[must_use]
    pub const fn held_for(frames: u32) -> Self {
        Self {
            held_frames: frames,
        }
    }

    /// Returns `true` while the button is held, including the first frame.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        self.held_frames > 0
    }

    /// Consecutive frames held so far, zero when released.
    #[inline]
    #[must_use]
    pub const fn held_frames(self) -> u32 {
        self.held_frames
    }

    /// Feed this frame's held sample.
    #[inline]
    pub fn sample(&mut self, held: bool) {
        self.held_frames = if held {
            self.held_frames.saturating_add(1)
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_consecutive_held_frames() {
        let mut state = ButtonState::default();
        assert!(!state.is_pressed());

        state.sample(true);
        assert_eq!(state, ButtonState::held_for(1));
        state.sample(true);
        state.sample(true);
        assert_eq!(state.held_frames(), 3);
        assert!(state.is_pressed());
    }

    #[test]
    fn release_resets_the_run() {
        let mut state = ButtonState::held_for(7);
        state.sample(false);
        assert_eq!(state, ButtonState::RELEASED);
        state.sample(true);
        assert_eq!(state.held_frames(), 1);
    }

    #[test]
    fn long_hold_saturates() {
        let mut state = ButtonState::held_for(u32::MAX);
        state.sample(true);
        assert_eq!(state.held_frames(), u32::MAX);
    }
}
