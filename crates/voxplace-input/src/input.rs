//! Per-frame input snapshot and the state derived from it.

use glam::Vec2;

use crate::button_state::ButtonState;
use crate::cursor::CursorTracker;
use crate::movement::Movement;

/// Everything the player did during one frame.
///
/// `primary` and `secondary` report whether the button is held right now;
/// [`InputState`] turns consecutive samples into held-frame counts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Latest absolute cursor position, if the cursor moved this frame.
    pub cursor: Option<Vec2>,
    /// Movement keys held.
    pub movement: Movement,
    /// Jump requested this frame.
    pub jump: bool,
    /// Primary action (place) held.
    pub primary: bool,
    /// Secondary action (remove) held.
    pub secondary: bool,
}

impl FrameInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_cursor(mut self, x: f32, y: f32) -> Self {
        self.cursor = Some(Vec2::new(x, y));
        self
    }

    #[must_use]
    pub const fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    #[must_use]
    pub const fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    #[must_use]
    pub const fn with_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    #[must_use]
    pub const fn with_secondary(mut self) -> Self {
        self.secondary = true;
        self
    }
}

/// Input state carried between frames.
///
/// # Usage
///
/// ```ignore
/// fn tick(state: &mut InputState, frame: &FrameInput) {
///     state.update(frame);
///     if let Some(delta) = state.look_delta() {
///         // rotate camera
///     }
///     // MUST call at end of tick
///     state.end_frame();
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputState {
    primary: ButtonState,
    secondary: ButtonState,
    cursor: CursorTracker,
    /// Look delta produced by this frame's cursor sample.
    look_delta: Option<Vec2>,
    movement: Movement,
    jump: bool,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this frame's snapshot into the state.
    ///
    /// **IMPORTANT**: Call this at the START of the frame, before querying.
    pub fn update(&mut self, frame: &FrameInput) {
        self.primary.sample(frame.primary);
        self.secondary.sample(frame.secondary);
        self.look_delta = frame.cursor.and_then(|pos| self.cursor.sample(pos));
        self.movement = frame.movement;
        self.jump = frame.jump;
    }

    /// Drop the per-frame look delta and jump request.
    ///
    /// **IMPORTANT**: This must be called at the end of every frame.
    pub fn end_frame(&mut self) {
        self.look_delta = None;
        self.jump = false;
    }

    #[must_use]
    pub const fn primary(&self) -> ButtonState {
        self.primary
    }

    #[must_use]
    pub const fn secondary(&self) -> ButtonState {
        self.secondary
    }

    /// Cursor look delta for this frame; `None` on the priming sample or when
    /// the cursor did not move.
    #[must_use]
    pub const fn look_delta(&self) -> Option<Vec2> {
        self.look_delta
    }

    #[must_use]
    pub const fn movement(&self) -> Movement {
        self.movement
    }

    #[must_use]
    pub const fn jump_requested(&self) -> bool {
        self.jump
    }

    /// Clear all input state, including the cursor priming sample.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
