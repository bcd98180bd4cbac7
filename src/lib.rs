//! Gap Arena - a rotating gap-wall arena simulation
//!
//! A closed circular wall spins around the arena center. The wall has a
//! single angular gap; bodies bounce elastically off the solid part and
//! escape through the gap. Every escaped body is replaced by two new ones
//! until a population cap ends the run.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, wall geometry, tick loop)
//! - `config`: Load-time configuration with validation
//! - `driver`: Frame pacing and the cooperative run loop

pub mod config;
pub mod driver;
pub mod sim;

pub use config::SimConfig;

use glam::Vec2;

/// Normalize an angle into `[0, 2π)`
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle % std::f32::consts::TAU;
    if wrapped < 0.0 {
        wrapped + std::f32::consts::TAU
    } else {
        wrapped
    }
}

/// Angle of a pixel-space offset in math convention (0 = +x, counter-clockwise).
///
/// Screen pixels grow downward, so the y component is negated before `atan2`.
/// Result is in `[0, 2π)`. Collision tests and draw-span computation must both
/// go through this so the gap never visually desyncs from the physics.
#[inline]
pub fn screen_angle(offset: Vec2) -> f32 {
    normalize_angle((-offset.y).atan2(offset.x))
}

/// Convert polar (r, theta) to a cartesian offset
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
