//! Moving bodies
//!
//! A body is pure kinematic state: position, velocity, radius, and a
//! cosmetic color. It has no behavior beyond integration; the wall and the
//! population logic act on it from outside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A moving disc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Position in pixel coordinates
    pub pos: Vec2,
    /// Velocity in units/second, pre-scaling
    pub vel: Vec2,
    /// Radius, fixed for the body's lifetime
    pub radius: f32,
    /// Presentation color, no effect on physics
    pub color: [u8; 3],
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance position by one tick's worth of motion
    ///
    /// `velocity_scale` is a fixed presentation-rate constant; it makes the
    /// motion legible on screen without changing the physical model.
    pub fn integrate(&mut self, dt: f32, velocity_scale: f32) {
        self.pos += self.vel * dt * velocity_scale;
    }

    /// True when the body is completely outside the screen rectangle
    ///
    /// All four edges must be clear, not merely the center past the wall
    /// radius. Evaluated after collision resolution so a wall bounce never
    /// counts as an escape.
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.pos.x + self.radius < 0.0
            || self.pos.x - self.radius > width
            || self.pos.y + self.radius < 0.0
            || self.pos.y - self.radius > height
    }
}
