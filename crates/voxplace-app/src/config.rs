//! Session configuration.

use glam::Vec3;
use voxplace_core::constants::{DEFAULT_CELL_SIZE, DEFAULT_MAX_DISTANCE};
use voxplace_core::{BoundingBox, Error, Result};
use voxplace_physics::player::DEFAULT_MOUSE_SENSITIVITY;
use voxplace_world::WorldSize;

/// Session configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Reach of targeting rays in world units.
    pub max_distance: f32,
    /// Edge lengths of a grid cell.
    pub cell_size: Vec3,
    /// World extent in cells.
    pub world_size: WorldSize,
    /// Box the player's position is clamped to.
    pub player_bounds: BoundingBox,
    /// Initial camera position.
    pub start_position: Vec3,
    /// Degrees of rotation per unit of cursor motion.
    pub mouse_sensitivity: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            cell_size: DEFAULT_CELL_SIZE,
            world_size: WorldSize::default(),
            player_bounds: BoundingBox::from_axes((-10.0, 10.0), (0.0, 10.0), (-10.0, 10.0)),
            start_position: Vec3::new(0.0, 2.0, 0.0),
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the targeting reach.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the grid cell size.
    pub fn with_cell_size(mut self, cell_size: Vec3) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the world extent.
    pub fn with_world_size(mut self, world_size: WorldSize) -> Self {
        self.world_size = world_size;
        self
    }

    /// Set the player's movement box.
    pub fn with_player_bounds(mut self, bounds: BoundingBox) -> Self {
        self.player_bounds = bounds;
        self
    }

    /// Set the initial camera position.
    pub fn with_start_position(mut self, position: Vec3) -> Self {
        self.start_position = position;
        self
    }

    /// Set the mouse-look sensitivity.
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !is_finite_positive(self.max_distance) {
            return Err(Error::InvalidConfig(format!(
                "max distance must be finite and positive, got {}",
                self.max_distance
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size.cmpgt(Vec3::ZERO).all()) {
            return Err(Error::InvalidConfig(format!(
                "cell size must be finite and positive on every axis, got {}",
                self.cell_size
            )));
        }
        if !is_finite_positive(self.mouse_sensitivity) {
            return Err(Error::InvalidConfig(format!(
                "mouse sensitivity must be finite and positive, got {}",
                self.mouse_sensitivity
            )));
        }
        let size = self.world_size;
        if size.x <= 0 || size.y <= 0 || size.z <= 0 {
            return Err(Error::InvalidConfig(format!(
                "world size must be positive on every axis, got {}x{}x{}",
                size.x, size.y, size.z
            )));
        }
        if !self.player_bounds.is_valid() {
            return Err(Error::InvalidConfig(format!(
                "player bounds are inverted: min {} max {}",
                self.player_bounds.min, self.player_bounds.max
            )));
        }
        Ok(())
    }

    /// Parse configuration overrides from command line arguments.
    ///
    /// Recognised flags: `--max-distance <F>`, `--world-size <X,Y,Z>`,
    /// `--start <X,Y,Z>`, `--sensitivity <F>`. Unknown arguments are ignored
    /// so the caller can handle its own flags.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--max-distance" => {
                    config.max_distance = parse_f32(&arg, next_value(&arg, &mut args)?)?;
                }
                "--world-size" => {
                    let [x, y, z] = parse_triple(&arg, &next_value(&arg, &mut args)?, |s| {
                        s.parse::<i32>().ok()
                    })?;
                    config.world_size = WorldSize::new(x, y, z);
                }
                "--start" => {
                    let [x, y, z] = parse_triple(&arg, &next_value(&arg, &mut args)?, |s| {
                        s.parse::<f32>().ok()
                    })?;
                    config.start_position = Vec3::new(x, y, z);
                }
                "--sensitivity" => {
                    config.mouse_sensitivity = parse_f32(&arg, next_value(&arg, &mut args)?)?;
                }
                _ => {}
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn is_finite_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn next_value(name: &str, args: &mut impl Iterator<Item = String>) -> Result<String> {
    args.next().ok_or_else(|| Error::InvalidArgument {
        name: name.to_string(),
        reason: "missing value".to_string(),
    })
}

fn parse_f32(name: &str, value: String) -> Result<f32> {
    value.trim().parse().map_err(|_| Error::InvalidArgument {
        name: name.to_string(),
        reason: format!("`{value}` is not a number"),
    })
}

fn parse_triple<T: Copy>(
    name: &str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<[T; 3]> {
    let invalid = || Error::InvalidArgument {
        name: name.to_string(),
        reason: format!("expected three comma-separated values, got `{value}`"),
    };
    let parts: Vec<T> = value
        .split(',')
        .map(|part| parse(part.trim()))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;
    <[T; 3]>::try_from(parts).map_err(|_| invalid())
}
