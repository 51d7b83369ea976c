//! Movement key flags.

use bitflags::bitflags;
use winit::keyboard::KeyCode;

bitflags! {
    /// Movement keys held this frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Movement: u8 {
        /// Walk along the camera's forward vector (W).
        const FORWARD = 0b0000_0001;
        /// Walk against the camera's forward vector (S).
        const BACK    = 0b0000_0010;
        /// Strafe left (A).
        const LEFT    = 0b0000_0100;
        /// Strafe right (D).
        const RIGHT   = 0b0000_1000;
    }
}

impl Movement {
    /// Flag bound to a physical key, if any.
    #[must_use]
    pub const fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::FORWARD),
            KeyCode::KeyS => Some(Self::BACK),
            KeyCode::KeyA => Some(Self::LEFT),
            KeyCode::KeyD => Some(Self::RIGHT),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn forward(self) -> bool {
        self.contains(Self::FORWARD)
    }

    #[inline]
    #[must_use]
    pub const fn back(self) -> bool {
        self.contains(Self::BACK)
    }

    #[inline]
    #[must_use]
    pub const fn left(self) -> bool {
        self.contains(Self::LEFT)
    }

    #[inline]
    #[must_use]
    pub const fn right(self) -> bool {
        self.contains(Self::RIGHT)
    }
}
