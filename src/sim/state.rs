//! Simulation state and population lifecycle
//!
//! `SimState` owns the wall, the ordered list of live bodies, and the
//! seeded RNG that drives the spawn policy. Body order never affects the
//! physics, only removal bookkeeping.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::config::{ConfigError, SimConfig};
use crate::polar_to_cartesian;

use super::body::Body;
use super::snapshot::FrameSnapshot;
use super::wall::GapWall;

/// Lifecycle of a run
///
/// `Running → Terminated` the first tick the population reaches the cap;
/// `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    Running,
    Terminated,
}

/// Load-time parameters the tick loop reads every frame
#[derive(Debug, Clone)]
pub struct SimParams {
    /// Escape rectangle
    pub width: f32,
    pub height: f32,
    /// Wall rotation rate, radians/second
    pub angular_rate: f32,
    pub body_radius: f32,
    pub body_speed: f32,
    pub velocity_scale: f32,
    pub palette: Vec<[u8; 3]>,
    pub max_bodies: usize,
}

/// Complete simulation state
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub params: SimParams,
    pub wall: GapWall,
    /// Live bodies, mutated only by the tick path
    pub bodies: Vec<Body>,
    pub phase: SimPhase,
    /// Tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl SimState {
    /// Build a run from validated configuration and seed the initial bodies
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let wall = GapWall::new(
            config.wall_center(),
            config.wall_radius,
            config.wall_thickness,
            config.gap_half_width(),
        )?;
        let mut state = Self {
            seed,
            params: SimParams {
                width: config.width as f32,
                height: config.height as f32,
                angular_rate: config.angular_rate(),
                body_radius: config.body_radius,
                body_speed: config.body_speed,
                velocity_scale: config.velocity_scale,
                palette: config.body_colors.clone(),
                max_bodies: config.max_bodies,
            },
            wall,
            bodies: Vec::with_capacity(config.max_bodies),
            phase: SimPhase::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        for _ in 0..config.initial_bodies {
            state.spawn_body();
        }
        Ok(state)
    }

    /// Spawn a body under the random policy, respecting the population cap
    ///
    /// Position is the arena center plus a small radial offset (within 10%
    /// of the wall radius) at a random angle; velocity is a random unit
    /// direction at the configured base speed.
    pub fn spawn_body(&mut self) {
        if self.bodies.len() >= self.params.max_bodies {
            return;
        }
        let angle = self.rng.random_range(0.0..TAU);
        let offset = self.rng.random_range(0.0..self.wall.radius * 0.1);
        let pos = self.wall.center + polar_to_cartesian(offset, angle);
        let heading = self.rng.random_range(0.0..TAU);
        let vel = polar_to_cartesian(1.0, heading) * self.params.body_speed;
        let color = self.random_color();
        self.bodies
            .push(Body::new(pos, vel, self.params.body_radius, color));
    }

    /// Spawn a body with explicit kinematics (seeding and tests only; the
    /// escape-replacement path always uses the random policy)
    pub fn spawn_body_at(&mut self, pos: Vec2, vel: Vec2) {
        if self.bodies.len() >= self.params.max_bodies {
            return;
        }
        let color = self.random_color();
        self.bodies
            .push(Body::new(pos, vel, self.params.body_radius, color));
    }

    fn random_color(&mut self) -> [u8; 3] {
        self.params.palette[self.rng.random_range(0..self.params.palette.len())]
    }

    /// Read-only view for the renderer and frame exporter
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self)
    }
}
