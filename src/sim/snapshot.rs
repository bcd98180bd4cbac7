//! Read-only frame snapshots for the renderer and frame exporter
//!
//! The engine hands collaborators a cloned view of the tick's state: body
//! kinematics plus the wall's solid-arc spans. Collaborators get no write
//! access to physics state, and nothing here feeds back into the sim.

use serde::Serialize;

use super::state::SimState;

/// One body as the renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct BodySnapshot {
    pub pos: [f32; 2],
    pub radius: f32,
    pub color: [u8; 3],
}

/// The wall as the renderer sees it
///
/// `solid_spans` are counter-clockwise `(start, end)` angle pairs covering
/// the solid arc; degenerate spans are already filtered out, so a renderer
/// draws exactly what is listed.
#[derive(Debug, Clone, Serialize)]
pub struct WallSnapshot {
    pub center: [f32; 2],
    pub radius: f32,
    pub thickness: f32,
    pub solid_spans: Vec<(f32, f32)>,
}

/// Everything a renderer or exporter needs for one tick
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub wall: WallSnapshot,
    pub bodies: Vec<BodySnapshot>,
}

impl FrameSnapshot {
    pub fn capture(state: &SimState) -> Self {
        Self {
            tick: state.time_ticks,
            wall: WallSnapshot {
                center: state.wall.center.to_array(),
                radius: state.wall.radius,
                thickness: state.wall.thickness,
                solid_spans: state.wall.solid_spans(),
            },
            bodies: state
                .bodies
                .iter()
                .map(|b| BodySnapshot {
                    pos: b.pos.to_array(),
                    radius: b.radius,
                    color: b.color,
                })
                .collect(),
        }
    }
}
