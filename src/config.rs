//! Load-time configuration
//!
//! All tunable constants of a run live here. The config is plain data:
//! it can be deserialized from a JSON file or built in code, and it is
//! validated once, before the simulation is constructed. Tick-time code
//! never re-checks these values.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at load time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("gap angle must be in (0, 360) degrees (got {0})")]
    GapOutOfRange(f32),
    #[error("body color palette must not be empty")]
    EmptyPalette,
    #[error("max_bodies must be at least 1")]
    ZeroMaxBodies,
    #[error("initial_bodies ({initial}) exceeds max_bodies ({max})")]
    InitialExceedsMax { initial: usize, max: usize },
    #[error("fps must be at least 1")]
    ZeroFps,
    #[error(transparent)]
    Geometry(#[from] crate::sim::GapWallError),
}

/// Simulation configuration
///
/// Unknown fields in a config file are ignored; missing fields take their
/// defaults, so a file only needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Window width in pixels (escape rectangle)
    pub width: u32,
    /// Window height in pixels (escape rectangle)
    pub height: u32,
    /// Wall center in pixel coordinates
    pub wall_center: [f32; 2],
    /// Wall collision radius
    pub wall_radius: f32,
    /// Wall line thickness (presentation only)
    pub wall_thickness: f32,
    /// Full angular width of the gap, in degrees
    pub gap_angle_degrees: f32,
    /// Wall rotation rate, in degrees per second
    pub rotation_speed_degrees: f32,
    /// Body radius
    pub body_radius: f32,
    /// Base body speed (units/second, pre-scaling)
    pub body_speed: f32,
    /// Fixed scale applied to velocity on integration, for legible on-screen motion
    pub velocity_scale: f32,
    /// Color palette new bodies draw from
    pub body_colors: Vec<[u8; 3]>,
    /// Bodies present at simulation start
    pub initial_bodies: usize,
    /// Population cap; reaching it terminates the run
    pub max_bodies: usize,
    /// Target frame rate for the driving loop
    pub fps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            wall_center: [400.0, 400.0],
            wall_radius: 300.0,
            wall_thickness: 5.0,
            gap_angle_degrees: 60.0,
            rotation_speed_degrees: 90.0,
            body_radius: 10.0,
            body_speed: 3.0,
            velocity_scale: 100.0,
            body_colors: vec![
                [231, 76, 60],
                [46, 204, 113],
                [52, 152, 219],
                [241, 196, 15],
                [155, 89, 182],
                [230, 126, 34],
            ],
            initial_bodies: 1,
            max_bodies: 200,
            fps: 60,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file, validating the result
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file, or fall back to defaults when the file is absent
    pub fn load_or_default(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::info!("loading config from {}", path.display());
            Self::load(path)
        } else {
            log::warn!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Reject degenerate geometry and invalid lifecycle parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("wall_radius", self.wall_radius),
            ("wall_thickness", self.wall_thickness),
            ("body_radius", self.body_radius),
            ("body_speed", self.body_speed),
            ("velocity_scale", self.velocity_scale),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.gap_angle_degrees > 0.0 && self.gap_angle_degrees < 360.0) {
            return Err(ConfigError::GapOutOfRange(self.gap_angle_degrees));
        }
        if self.body_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.max_bodies == 0 {
            return Err(ConfigError::ZeroMaxBodies);
        }
        if self.initial_bodies > self.max_bodies {
            return Err(ConfigError::InitialExceedsMax {
                initial: self.initial_bodies,
                max: self.max_bodies,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    /// Wall center as a vector
    pub fn wall_center(&self) -> Vec2 {
        Vec2::from_array(self.wall_center)
    }

    /// Half-angle of the gap opening, in radians
    pub fn gap_half_width(&self) -> f32 {
        self.gap_angle_degrees.to_radians() / 2.0
    }

    /// Wall rotation rate, in radians per second
    pub fn angular_rate(&self) -> f32 {
        self.rotation_speed_degrees.to_radians()
    }
}
