//! First-person player: walking, gravity, jumping and mouse look.

use glam::Vec3;
use tracing::trace;
use voxplace_core::math::{clamp, normalize};
use voxplace_core::BoundingBox;
use voxplace_input::Movement;

/// Downward acceleration in units per second squared.
pub const GRAVITY: f32 = -9.8;

/// Upward velocity applied by a jump.
pub const JUMP_SPEED: f32 = 15.0;

/// Walking speed in units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Camera height kept above the floor of the bounding box.
pub const EYE_HEIGHT: f32 = 1.5;

/// Pitch limit in degrees, short of straight up/down to avoid flipping.
pub const PITCH_LIMIT: f32 = 89.0;

/// Degrees of rotation per unit of cursor motion.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;

/// Player state.
///
/// `position` is the camera position and the origin of every targeting ray.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Horizontal rotation in degrees.
    pub yaw: f32,
    /// Vertical rotation in degrees.
    pub pitch: f32,
    camera_front: Vec3,
    camera_up: Vec3,
    bounds: BoundingBox,
    grounded: bool,
}

impl Player {
    /// Create a player at `start` looking down -z.
    pub fn new(bounds: BoundingBox, start: Vec3) -> Self {
        Self {
            position: start,
            velocity: Vec3::ZERO,
            yaw: -90.0,
            pitch: 0.0,
            camera_front: Vec3::NEG_Z,
            camera_up: Vec3::Y,
            bounds,
            grounded: true,
        }
    }

    /// Direction the camera is facing, unit length.
    #[inline]
    pub const fn camera_direction(&self) -> Vec3 {
        self.camera_front
    }

    #[inline]
    pub const fn camera_up(&self) -> Vec3 {
        self.camera_up
    }

    #[inline]
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[inline]
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Point the camera along `direction` without touching yaw/pitch.
    pub fn set_camera_direction(&mut self, direction: Vec3) {
        self.camera_front = normalize(direction);
    }

    /// Advance movement and gravity by `dt` seconds.
    pub fn update(&mut self, dt: f32, keys: Movement) {
        let forward = normalize(self.look_vector());
        let right = normalize(Vec3::new(-forward.z, 0.0, forward.x));

        let mut movement = Vec3::ZERO;
        if keys.forward() {
            movement += forward;
        }
        if keys.back() {
            movement -= forward;
        }
        if keys.left() {
            movement -= Vec3::new(right.x, 0.0, right.z);
        }
        if keys.right() {
            movement += Vec3::new(right.x, 0.0, right.z);
        }
        self.position += movement * MOVE_SPEED * dt;

        if self.grounded {
            self.velocity.y = 0.0;
        } else {
            self.velocity.y += GRAVITY * dt;
        }
        self.position.y += self.velocity.y * dt;

        self.position = self.bounds.clamp_point(self.position);

        let floor = self.bounds.min.y;
        if self.position.y <= floor + 0.001 {
            self.position.y = floor;
        }
        // Exactly at eye height counts as airborne: a standing player is
        // grounded only on every other frame.
        if self.position.y < floor + EYE_HEIGHT {
            self.position.y = floor + EYE_HEIGHT;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Jump if standing on the floor.
    pub fn jump(&mut self) {
        if self.grounded {
            trace!("jump");
            self.velocity.y = JUMP_SPEED;
            self.grounded = false;
        }
    }

    /// Rotate the camera by a cursor delta (y already inverted).
    pub fn handle_mouse(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += dx * sensitivity;
        self.pitch = clamp(self.pitch + dy * sensitivity, -PITCH_LIMIT, PITCH_LIMIT);
        self.camera_front = normalize(self.look_vector());
    }

    fn look_vector(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn player() -> Player {
        Player::new(
            BoundingBox::from_axes((-10.0, 10.0), (0.0, 10.0), (-10.0, 10.0)),
            Vec3::new(0.0, 2.0, 0.0),
        )
    }

    /// Let the player land, stopping on a grounded frame.
    fn settle(player: &mut Player) {
        for _ in 0..120 {
            player.update(1.0 / 60.0, Movement::empty());
        }
        if !player.is_grounded() {
            player.update(1.0 / 60.0, Movement::empty());
        }
    }

    #[test]
    fn settles_at_eye_height() {
        let mut player = player();
        settle(&mut player);
        assert_eq!(player.position.y, EYE_HEIGHT);
        assert!(player.is_grounded());

        // Standing still alternates between grounded and airborne frames
        // without leaving eye height.
        for expected in [false, true, false, true] {
            player.update(1.0 / 60.0, Movement::empty());
            assert_eq!(player.position.y, EYE_HEIGHT);
            assert_eq!(player.is_grounded(), expected);
        }
    }

    #[test]
    fn exactly_at_eye_height_is_airborne() {
        let mut player = Player::new(
            BoundingBox::from_axes((-10.0, 10.0), (0.0, 10.0), (-10.0, 10.0)),
            Vec3::new(0.0, EYE_HEIGHT, 0.0),
        );
        player.update(1.0 / 60.0, Movement::empty());
        assert_eq!(player.position.y, EYE_HEIGHT);
        assert!(!player.is_grounded());

        player.jump();
        assert_eq!(player.velocity.y, 0.0);

        player.update(1.0 / 60.0, Movement::empty());
        assert_eq!(player.position.y, EYE_HEIGHT);
        assert!(player.is_grounded());
    }

    #[test]
    fn jump_only_from_ground() {
        let mut player = player();
        settle(&mut player);
        player.jump();
        assert!(!player.is_grounded());
        assert_relative_eq!(player.velocity.y, JUMP_SPEED);

        player.update(0.1, Movement::empty());
        assert!(player.position.y > EYE_HEIGHT);
        assert!(!player.is_grounded());

        let vy = player.velocity.y;
        player.jump();
        assert_relative_eq!(player.velocity.y, vy);
    }

    #[test]
    fn walks_along_camera_forward() {
        let mut player = player();
        player.position.y = EYE_HEIGHT;
        player.update(1.0, Movement::FORWARD);
        assert_relative_eq!(player.position.z, -MOVE_SPEED, epsilon = 1e-4);
        assert_relative_eq!(player.position.x, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn strafes_right_of_forward() {
        let mut player = player();
        player.position.y = EYE_HEIGHT;
        player.update(0.5, Movement::RIGHT);
        assert_relative_eq!(player.position.x, 2.5, epsilon = 1e-4);
        assert_relative_eq!(player.position.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn clamped_to_bounds() {
        let mut player = player();
        player.position.y = EYE_HEIGHT;
        for _ in 0..10 {
            player.update(1.0, Movement::FORWARD);
        }
        assert_relative_eq!(player.position.z, -10.0);
    }

    #[test]
    fn mouse_look_turns_and_clamps() {
        let mut player = player();
        assert_eq!(player.camera_direction(), Vec3::NEG_Z);

        player.handle_mouse(900.0, 0.0, DEFAULT_MOUSE_SENSITIVITY);
        let front = player.camera_direction();
        assert_relative_eq!(front.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(front.z, 0.0, epsilon = 1e-5);

        player.handle_mouse(0.0, 5000.0, DEFAULT_MOUSE_SENSITIVITY);
        assert_eq!(player.pitch, PITCH_LIMIT);
        assert_relative_eq!(player.camera_direction().length(), 1.0, epsilon = 1e-5);
        assert!(player.camera_direction().y > 0.99);
    }
}
