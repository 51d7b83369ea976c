//! Input handling for Voxplace.
//!
//! The targeting core never reads a window directly. Each frame the driver
//! hands it a [`FrameInput`] snapshot; [`InputState`] turns those snapshots
//! into held-frame counts and cursor deltas.
//!
//! # Core Types
//!
//! - [`FrameInput`]: What the player did this frame (buttons, keys, cursor)
//! - [`InputState`]: Held buttons and cursor tracking across frames
//! - [`InputCollector`]: Builds a [`FrameInput`] from `winit` window events
//!
//! # Usage
//!
//! ```ignore
//! use voxplace_input::{InputCollector, InputState};
//!
//! let mut collector = InputCollector::new();
//! let mut state = InputState::new();
//!
//! // In event handler
//! collector.process_window_event(&event);
//!
//! // Once per frame
//! let frame = collector.snapshot();
//! state.update(&frame);
//! if state.primary().is_pressed() {
//!     // place a block
//! }
//! state.end_frame();
//! ```

mod button_state;
mod collector;
mod cursor;
mod input;
mod movement;

pub use button_state::ButtonState;
pub use collector::InputCollector;
pub use cursor::CursorTracker;
pub use input::{FrameInput, InputState};
pub use movement::Movement;

// Re-export winit types commonly used with input
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
