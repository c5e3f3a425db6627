//! Ledge-Climb
//!
//! While airborne, a jump press (or a jump held past a short threshold) looks
//! for a ledge in front of the camera. A ledge needs three things:
//!
//! 1. the look ray hits a wall within `check_distance`
//! 2. the view faces that wall head-on (`dot(look, -normal) >= facing_dot`)
//! 3. a downward ray from above the hit lands on a surface whose height above
//!    the feet is strictly inside `(min_climb_height, max_climb_height)`
//!
//! A detected ledge starts a [`ClimbSession`]: collision and gravity are
//! switched off and the body is carried linearly to a point just past the
//! edge, then dropped there exactly. Sessions always run to completion.

use glam::Vec3;

use super::maneuver::{Maneuver, Motion, MotionContext, ViewRay};
use crate::config::{LedgeClimbTuning, LocomotionConfig};
use crate::physics::{CollisionProvider, LayerMask};

/// The top probe starts this far behind the wall face so it lands on the
/// ledge top instead of grazing the edge.
const FACE_INSET: f32 = 0.05;

/// One in-progress climb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbSession {
    pub start: Vec3,
    pub end: Vec3,
    pub elapsed: f32,
    pub duration: f32,
}

impl ClimbSession {
    pub fn new(start: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            start,
            end,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance the clock and return the body position for this tick.
    ///
    /// Once complete the result is exactly `end`.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt.max(0.0);
        if self.is_complete() {
            self.end
        } else {
            self.start.lerp(self.end, self.elapsed / self.duration)
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
pub struct LedgeClimb {
    tuning: LedgeClimbTuning,
    mask: LayerMask,
    session: Option<ClimbSession>,
    hold_time: f32,
}

impl LedgeClimb {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            tuning: config.ledge_climb,
            mask: config.probe.surface_mask,
            session: None,
            hold_time: 0.0,
        }
    }

    pub fn session(&self) -> Option<&ClimbSession> {
        self.session.as_ref()
    }

    pub fn is_climbing(&self) -> bool {
        self.session.is_some()
    }

    /// Track how long jump has been held. Call once per tick.
    pub fn track_hold(&mut self, jump_held: bool, dt: f32) {
        if jump_held {
            self.hold_time += dt;
        } else {
            self.hold_time = 0.0;
        }
    }

    /// Find a climbable ledge and return the ledge surface point.
    pub fn detect_ledge(
        &self,
        world: &dyn CollisionProvider,
        view: ViewRay,
        feet: Vec3,
    ) -> Option<Vec3> {
        let t = &self.tuning;
        let look = view.direction.normalize_or_zero();

        let wall = world.raycast(view.origin, look, t.check_distance, self.mask)?;

        let facing = look.dot(-wall.normal);
        if facing < t.facing_dot {
            tracing::trace!(facing, "ledge rejected: not facing wall");
            return None;
        }

        let top_origin = wall.point - wall.normal * FACE_INSET + Vec3::Y * t.check_height;
        let Some(ledge) =
            world.raycast(top_origin, Vec3::NEG_Y, t.check_height + t.extra_drop, self.mask)
        else {
            tracing::trace!("ledge rejected: no top surface");
            return None;
        };

        let height = ledge.point.y - feet.y;
        if height > t.min_climb_height && height < t.max_climb_height {
            Some(ledge.point)
        } else {
            tracing::trace!(height, "ledge rejected: out of climb range");
            None
        }
    }

    fn triggered(&self, ctx: &MotionContext<'_>) -> bool {
        ctx.input.jump_pressed || (ctx.input.jump_held && self.hold_time >= self.tuning.hold_threshold)
    }
}

impl Maneuver for LedgeClimb {
    fn try_enter(&mut self, ctx: &mut MotionContext<'_>) -> bool {
        if self.session.is_some() || ctx.ground.grounded || !self.triggered(ctx) {
            return false;
        }
        let Some(ledge) = self.detect_ledge(ctx.world, ctx.view, ctx.body.position) else {
            return false;
        };

        let body = &mut *ctx.body;
        let end = ledge + body.forward() * self.tuning.forward_overshoot;
        self.session = Some(ClimbSession::new(body.position, end, self.tuning.duration));

        body.collision_enabled = false;
        body.gravity_enabled = false;
        body.vertical_velocity = 0.0;
        body.air_momentum = Vec3::ZERO;

        tracing::debug!(start = ?body.position, end = ?end, "ledge climb started");
        true
    }

    fn update(&mut self, ctx: &mut MotionContext<'_>) -> Motion {
        match self.session.as_mut() {
            Some(session) => Motion::Teleport(session.advance(ctx.dt)),
            None => Motion::NONE,
        }
    }

    fn try_exit(&mut self, ctx: &mut MotionContext<'_>) -> bool {
        let Some(session) = self.session else {
            return true;
        };
        if !session.is_complete() {
            return false;
        }

        ctx.body.position = session.end;
        ctx.body.collision_enabled = true;
        ctx.body.gravity_enabled = true;
        self.session = None;
        self.hold_time = 0.0;
        tracing::debug!(end = ?session.end, "ledge climb finished");
        true
    }
}
