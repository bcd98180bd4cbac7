//! Per-tick update
//!
//! One tick: advance the wall rotation, integrate and collide every body,
//! remove escapees, spawn replacements under the capped-growth rule, and
//! check the terminal condition. Ticks are synchronous and run to
//! completion; a terminated state never ticks again.

use super::state::{SimPhase, SimState};

/// Advance the simulation by one elapsed-time step
///
/// `dt` is strictly positive wall-clock seconds supplied by the driver.
pub fn tick(state: &mut SimState, dt: f32) {
    if state.phase == SimPhase::Terminated {
        return;
    }
    state.time_ticks += 1;

    // Rotation advances once, before any consumer reads it this tick, so
    // collision and the draw spans see the same gap position.
    state.wall.advance(state.params.angular_rate, dt);

    // Integrate, collide, then test escape. The escape check runs after
    // collision resolution so a body pushed back by a wall bounce is never
    // marked escaped. Each index lands in the list at most once.
    let mut escaped: Vec<usize> = Vec::new();
    for (idx, body) in state.bodies.iter_mut().enumerate() {
        body.integrate(dt, state.params.velocity_scale);
        state.wall.collide_body(body);
        if body.is_off_screen(state.params.width, state.params.height) {
            escaped.push(idx);
        }
    }

    for &idx in escaped.iter().rev() {
        state.bodies.remove(idx);
    }
    let removed = escaped.len();
    if removed > 0 {
        log::debug!(
            "tick {}: {} body(ies) escaped, {} remain",
            state.time_ticks,
            removed,
            state.bodies.len()
        );
    }

    // Each escape increases population pressure by two. Replacements that
    // would exceed the cap are dropped outright, not deferred.
    for _ in 0..removed * 2 {
        if state.bodies.len() >= state.params.max_bodies {
            break;
        }
        state.spawn_body();
    }

    if state.bodies.len() >= state.params.max_bodies {
        log::info!(
            "population cap reached ({}/{}) at tick {}, terminating",
            state.bodies.len(),
            state.params.max_bodies,
            state.time_ticks
        );
        state.phase = SimPhase::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimConfig;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn state_with(initial: usize, max: usize) -> SimState {
        let config = SimConfig {
            initial_bodies: initial,
            max_bodies: max,
            ..Default::default()
        };
        SimState::new(&config, 42).unwrap()
    }

    /// Park a body past the right screen edge, aligned with the gap (which
    /// straddles angle 0 at rotation 0), so the next tick detects an escape.
    fn add_escapee(state: &mut SimState) {
        state.spawn_body_at(Vec2::new(815.0, 400.0), Vec2::ZERO);
    }

    #[test]
    fn test_escape_triggers_double_spawn() {
        let mut state = state_with(3, 10);
        add_escapee(&mut state);
        assert_eq!(state.bodies.len(), 4);

        tick(&mut state, DT);
        // One removed, two added
        assert_eq!(state.bodies.len(), 5);
        assert_eq!(state.phase, SimPhase::Running);
    }

    #[test]
    fn test_replacements_saturate_at_cap() {
        let mut state = state_with(4, 5);
        add_escapee(&mut state);
        assert_eq!(state.bodies.len(), 5);

        tick(&mut state, DT);
        // Removed one (4 left), only one of the two replacements fits
        assert_eq!(state.bodies.len(), 5);
        assert_eq!(state.phase, SimPhase::Terminated);
    }

    #[test]
    fn test_cap_terminates_without_escapes() {
        let mut state = state_with(5, 5);
        assert_eq!(state.phase, SimPhase::Running);
        tick(&mut state, DT);
        assert_eq!(state.phase, SimPhase::Terminated);
        assert_eq!(state.bodies.len(), 5);
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut state = state_with(5, 5);
        tick(&mut state, DT);
        assert_eq!(state.phase, SimPhase::Terminated);

        let ticks = state.time_ticks;
        let rotation = state.wall.rotation();
        let positions: Vec<Vec2> = state.bodies.iter().map(|b| b.pos).collect();
        for _ in 0..10 {
            tick(&mut state, DT);
        }
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.wall.rotation(), rotation);
        let after: Vec<Vec2> = state.bodies.iter().map(|b| b.pos).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_wall_bounce_is_not_an_escape() {
        let mut state = state_with(0, 10);
        // Past the left screen edge at angle π, where the wall is solid
        // (gap sits near angle 0): collision resolution pushes the body back
        // inside before the escape check runs.
        state.spawn_body_at(Vec2::new(-60.0, 400.0), Vec2::new(-1.0, 0.0));

        tick(&mut state, DT);
        assert_eq!(state.bodies.len(), 1);
        let body = &state.bodies[0];
        assert!(body.pos.x > 0.0);
        let edge_dist = (body.pos - state.wall.center).length() + body.radius;
        assert!((edge_dist - state.wall.radius).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_advances_each_tick() {
        let mut state = state_with(1, 10);
        let before = state.wall.rotation();
        tick(&mut state, DT);
        let expected = before + state.params.angular_rate * DT;
        assert!((state.wall.rotation() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_outbound_body_reflects_off_solid_wall() {
        let mut state = state_with(0, 10);
        // Heading outward along -x into solid wall (gap is near angle 0)
        state.spawn_body_at(Vec2::new(105.0, 400.0), Vec2::new(-2.0, 0.0));

        tick(&mut state, DT);
        let body = &state.bodies[0];
        // Velocity reflected back toward the arena
        assert!(body.vel.x > 0.0);
        assert_eq!(body.vel.y, 0.0);
    }
}
