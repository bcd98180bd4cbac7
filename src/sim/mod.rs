//! Deterministic simulation module
//!
//! All arena logic lives here. This module must be pure and deterministic:
//! - Driven by externally supplied elapsed time only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wall;

pub use body::Body;
pub use snapshot::{BodySnapshot, FrameSnapshot, WallSnapshot};
pub use state::{SimPhase, SimState};
pub use tick::tick;
pub use wall::{GapWall, GapWallError, reflect_velocity};
