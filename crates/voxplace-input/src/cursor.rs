//! Cursor motion tracking for mouse look.

use glam::Vec2;

/// Turns absolute cursor samples into look deltas.
///
/// The first sample only primes the tracker: there is no previous position
/// to diff against, so it yields no delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Record a cursor position and return the look delta since the last one.
    ///
    /// The y component is inverted so that moving the cursor up looks up.
    pub fn sample(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = self
            .last
            .map(|last| Vec2::new(position.x - last.x, last.y - position.y));
        self.last = Some(position);
        delta
    }

    /// Last recorded position, `None` before the first sample.
    #[must_use]
    pub const fn last(&self) -> Option<Vec2> {
        self.last
    }

    /// Forget the last position; the next sample primes again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
