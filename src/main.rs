//! Gap Arena entry point
//!
//! Headless native runner: loads configuration, seeds a run from the clock,
//! and drives the simulation at the configured frame rate until the
//! population cap terminates it.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use gap_arena::SimConfig;
use gap_arena::driver::{self, NullSink};
use gap_arena::sim::SimState;

fn main() {
    env_logger::init();

    let config = match SimConfig::load_or_default(Path::new("config.json")) {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut state = match SimState::new(&config, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("failed to build simulation: {err}");
            std::process::exit(1);
        }
    };

    // Input polling and window close are an embedding host's job; the
    // headless runner only stops at the population cap.
    let mut sink = NullSink;
    driver::run(&mut state, config.fps, || false, &mut sink);
}
