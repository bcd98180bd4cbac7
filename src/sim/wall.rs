//! Rotating gap-wall geometry and collision
//!
//! The wall is an annulus of fixed center and radius with a single angular
//! gap. Only its rotation mutates, once per tick. Angles follow the math
//! convention (0 = +x, counter-clockwise positive); pixel-space offsets are
//! converted through [`crate::screen_angle`] so collision and drawing agree.

use glam::Vec2;
use thiserror::Error;

use crate::{normalize_angle, screen_angle};

use super::body::Body;

/// Bodies closer to the center than this are skipped entirely: normalizing
/// a near-zero offset would corrupt position and velocity irrecoverably.
const CENTER_EPS: f32 = 1e-6;

/// Solid spans shorter than this are dropped from the draw contract.
const SPAN_EPS: f32 = 1e-6;

/// Wall geometry rejected at construction time
#[derive(Debug, Error)]
pub enum GapWallError {
    #[error("wall radius must be positive (got {0})")]
    NonPositiveRadius(f32),
    #[error("gap half-width must be in (0, π) radians (got {0})")]
    GapHalfWidthOutOfRange(f32),
}

/// A static-shape, dynamically-rotating annulus boundary with one gap
#[derive(Debug, Clone)]
pub struct GapWall {
    /// Arena center in pixel coordinates
    pub center: Vec2,
    /// Collision radius (outer boundary of the solid annulus)
    pub radius: f32,
    /// Line thickness, presentation only
    pub thickness: f32,
    /// Half-angle of the gap opening, radians
    gap_half_width: f32,
    /// Current rotation in `[0, 2π)`, advanced externally once per tick
    rotation: f32,
}

impl GapWall {
    pub fn new(
        center: Vec2,
        radius: f32,
        thickness: f32,
        gap_half_width: f32,
    ) -> Result<Self, GapWallError> {
        if !(radius > 0.0) {
            return Err(GapWallError::NonPositiveRadius(radius));
        }
        if !(gap_half_width > 0.0 && gap_half_width < std::f32::consts::PI) {
            return Err(GapWallError::GapHalfWidthOutOfRange(gap_half_width));
        }
        Ok(Self {
            center,
            radius,
            thickness,
            gap_half_width,
            rotation: 0.0,
        })
    }

    /// Current rotation angle in `[0, 2π)`
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Advance rotation by `angular_rate * dt`, normalized into `[0, 2π)`
    pub fn advance(&mut self, angular_rate: f32, dt: f32) {
        self.rotation = normalize_angle(self.rotation + angular_rate * dt);
    }

    /// Gap boundary angles `(start, end)`, both in `[0, 2π)`
    ///
    /// The gap spans half-width on each side of the rotation angle. When
    /// `start >= end` the interval wraps through 0.
    pub fn gap_bounds(&self) -> (f32, f32) {
        let rotation = normalize_angle(self.rotation);
        let start = normalize_angle(rotation - self.gap_half_width);
        let end = normalize_angle(rotation + self.gap_half_width);
        (start, end)
    }

    /// Whether an angle falls inside the gap opening
    ///
    /// Membership is strict: a body exactly on the seam collides with the
    /// solid wall rather than passing through.
    pub fn is_in_gap(&self, angle: f32) -> bool {
        let angle = normalize_angle(angle);
        let (start, end) = self.gap_bounds();
        if start < end {
            start < angle && angle < end
        } else {
            // Gap wraps through 0
            angle > start || angle < end
        }
    }

    /// Test and resolve a collision between the wall and one body
    ///
    /// Corrects position and reflects velocity if the body hits the solid
    /// part of the wall. Returns `true` only for a solid collision; a body
    /// aligned with the gap passes freely (its escape is detected later by
    /// the off-screen check, not here).
    pub fn collide_body(&self, body: &mut Body) -> bool {
        let to_body = body.pos - self.center;
        let dist = to_body.length();

        // Degenerate: body at the exact center, skip this tick
        if dist < CENTER_EPS {
            return false;
        }

        // Candidate only when the body's outer edge reaches the boundary
        if dist + body.radius < self.radius {
            return false;
        }

        if self.is_in_gap(screen_angle(to_body)) {
            return false;
        }

        let penetration = dist + body.radius - self.radius;
        let normal = to_body / dist;
        if penetration > 0.0 {
            // Push back along the outward normal so the edge sits exactly
            // at the collision radius
            body.pos -= normal * penetration;
        }
        // Reflect only when moving into the wall. A body pushed out on a
        // previous frame may still sit at the boundary while moving away;
        // reflecting it again would bounce it back into the arena wall.
        if body.vel.dot(normal) > 0.0 {
            body.vel = reflect_velocity(body.vel, normal);
        }
        true
    }

    /// Solid-arc span(s) for the renderer, counter-clockwise from gap end
    /// to gap start
    ///
    /// Split into two spans when the solid arc crosses angle 0. Spans that
    /// degenerate to a point (gap ≈ 360°) are omitted so the renderer skips
    /// drawing rather than failing.
    pub fn solid_spans(&self) -> Vec<(f32, f32)> {
        let (gap_start, gap_end) = self.gap_bounds();
        let candidates = if gap_end < gap_start {
            vec![(gap_end, gap_start)]
        } else {
            vec![(gap_end, std::f32::consts::TAU), (0.0, gap_start)]
        };
        candidates
            .into_iter()
            .filter(|(a, b)| b - a > SPAN_EPS)
            .collect()
    }
}

/// Reflect velocity off a surface: `v' = v - 2(v·n)n`
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
