//! Builds [`FrameInput`] snapshots from `winit` window events.

use glam::Vec2;
use tracing::trace;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::FrameInput;
use crate::movement::Movement;

/// Accumulates window events between frames.
///
/// Held state (movement keys, mouse buttons) persists across snapshots;
/// the cursor sample and jump request are consumed by [`Self::snapshot`].
#[derive(Debug, Default)]
pub struct InputCollector {
    movement: Movement,
    primary: bool,
    secondary: bool,
    jump: bool,
    cursor: Option<Vec2>,
}

impl InputCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return false;
                };
                self.process_key(key, event.state);
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.process_button(*button, *state);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::Focused(false) => {
                trace!("focus lost, releasing held input");
                self.release_all();
                true
            }
            _ => false,
        }
    }

    /// Apply a key transition. Key repeats arrive as further presses.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        if key == KeyCode::Space {
            self.jump |= pressed;
            return;
        }
        if let Some(flag) = Movement::from_key(key) {
            self.movement.set(flag, pressed);
        }
    }

    /// Apply a mouse button transition. Left is primary, right is secondary.
    pub fn process_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.primary = pressed,
            MouseButton::Right => self.secondary = pressed,
            _ => {}
        }
    }

    /// Take this frame's snapshot.
    pub fn snapshot(&mut self) -> FrameInput {
        FrameInput {
            cursor: self.cursor.take(),
            movement: self.movement,
            jump: std::mem::take(&mut self.jump),
            primary: self.primary,
            secondary: self.secondary,
        }
    }

    fn release_all(&mut self) {
        self.movement = Movement::empty();
        self.primary = false;
        self.secondary = false;
        self.jump = false;
    }
}
