//! Frame pacing and the cooperative run loop
//!
//! The driver supplies the engine with elapsed time once per tick and
//! consults the quit signal at the top of each iteration; in-flight tick
//! work always completes before the check. Everything is single-threaded:
//! the pacing sleep is a cooperative yield point, not a concurrency hazard.

use std::time::{Duration, Instant};

use crate::sim::{FrameSnapshot, SimPhase, SimState, tick};

/// Opaque consumer of fully-built frames (recorder, renderer bridge)
///
/// The engine does not depend on capture succeeding; sinks absorb their own
/// failures.
pub trait FrameSink {
    fn capture(&mut self, frame: &FrameSnapshot);
    fn finalize(&mut self) {}
}

/// Sink that discards every frame
pub struct NullSink;

impl FrameSink for NullSink {
    fn capture(&mut self, _frame: &FrameSnapshot) {}
}

/// Frame-rate pacing: blocks once per tick and reports real elapsed time
pub struct Ticker {
    frame: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    /// Sleep out the remainder of the frame, then return elapsed seconds
    ///
    /// The result is strictly positive and clamped so a stalled host (debug
    /// pause, suspended process) cannot produce one giant integration step.
    pub fn wait(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if now < target {
            std::thread::sleep(target - now);
        }
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt.clamp(f32::EPSILON, 0.25)
    }
}

/// Drive a simulation to termination
///
/// Loops until the population cap terminates the run or `quit_requested`
/// reports true. Each completed tick's snapshot is handed to the sink.
pub fn run(
    state: &mut SimState,
    fps: u32,
    mut quit_requested: impl FnMut() -> bool,
    sink: &mut dyn FrameSink,
) {
    log::info!(
        "run started: seed {}, {} bodies, cap {}",
        state.seed,
        state.bodies.len(),
        state.params.max_bodies
    );
    let mut ticker = Ticker::new(fps);
    while state.phase == SimPhase::Running {
        if quit_requested() {
            log::info!("quit requested at tick {}", state.time_ticks);
            break;
        }
        let dt = ticker.wait();
        tick(state, dt);
        sink.capture(&state.snapshot());
    }
    sink.finalize();
    log::info!(
        "run finished after {} ticks with {} bodies",
        state.time_ticks,
        state.bodies.len()
    );
}
