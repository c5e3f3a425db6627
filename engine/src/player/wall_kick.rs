//! Wall-Kick
//!
//! An airborne jump press next to a wall launches the body up and directly
//! away from the wall surface. Kicks are budgeted per airtime and the same
//! wall cannot be kicked twice in a row; both limits clear on landing or on a
//! ground jump.

use glam::Vec3;

use super::maneuver::{Maneuver, Motion, MotionContext};
use super::movement::MovementIntegrator;
use crate::config::{LocomotionConfig, WallKickTuning};
use crate::probe::same_surface;

/// Kick budget and the last wall kicked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallKickTracker {
    kick_count: u32,
    last_wall_normal: Option<Vec3>,
}

impl WallKickTracker {
    pub fn kick_count(&self) -> u32 {
        self.kick_count
    }

    pub fn last_wall_normal(&self) -> Option<Vec3> {
        self.last_wall_normal
    }

    /// True when `normal` matches the previously kicked wall.
    pub fn is_repeat(&self, normal: Vec3, tolerance_deg: f32) -> bool {
        self.last_wall_normal
            .is_some_and(|last| same_surface(last, normal, tolerance_deg))
    }

    fn record(&mut self, normal: Vec3) {
        self.kick_count += 1;
        self.last_wall_normal = Some(normal);
    }

    pub fn reset(&mut self) {
        self.kick_count = 0;
        self.last_wall_normal = None;
    }
}

/// Velocity change produced by a successful kick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallKickImpulse {
    /// New vertical velocity
    pub vertical_velocity: f32,
    /// New air momentum, pointing away from the wall
    pub horizontal: Vec3,
    pub wall_normal: Vec3,
}

#[derive(Debug, Clone)]
pub struct WallKick {
    tuning: WallKickTuning,
    tracker: WallKickTracker,
    /// Airborne arc after the kick integrates like any other airtime
    air: MovementIntegrator,
}

impl WallKick {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            tuning: config.wall_kick,
            tracker: WallKickTracker::default(),
            air: MovementIntegrator::new(config),
        }
    }

    pub fn tracker(&self) -> &WallKickTracker {
        &self.tracker
    }

    pub fn reset(&mut self) {
        if self.tracker.kick_count > 0 {
            tracing::trace!(kicks = self.tracker.kick_count, "wall-kick budget restored");
        }
        self.tracker.reset();
    }

    /// Look for a kickable wall and consume a kick if one is found.
    ///
    /// Returns `None` when the budget is spent or no new wall is in range;
    /// the tracker is untouched in that case.
    pub fn attempt(&mut self, ctx: &MotionContext<'_>) -> Option<WallKickImpulse> {
        let t = &self.tuning;
        if ctx.ground.grounded || self.tracker.kick_count >= t.max_wall_kicks {
            tracing::trace!(
                grounded = ctx.ground.grounded,
                kicks = self.tracker.kick_count,
                "wall-kick unavailable"
            );
            return None;
        }

        let Some(hit) = ctx.probe.query_near_wall(
            ctx.world,
            ctx.body.position,
            ctx.body.forward(),
            ctx.body.right(),
            t.wall_check_distance,
            self.tracker.last_wall_normal,
            t.normal_tolerance_deg,
        ) else {
            tracing::trace!("wall-kick rejected: no new wall in range");
            return None;
        };

        let vertical_velocity = t.kick_force + self.tracker.kick_count as f32 * t.kick_force_increment;
        self.tracker.record(hit.normal);
        Some(WallKickImpulse {
            vertical_velocity,
            horizontal: hit.normal * t.horizontal_push,
            wall_normal: hit.normal,
        })
    }
}

impl Maneuver for WallKick {
    fn try_enter(&mut self, ctx: &mut MotionContext<'_>) -> bool {
        if !ctx.input.jump_pressed {
            return false;
        }
        let Some(impulse) = self.attempt(ctx) else {
            return false;
        };

        ctx.body.vertical_velocity = impulse.vertical_velocity;
        ctx.body.air_momentum = impulse.horizontal;
        tracing::debug!(
            normal = ?impulse.wall_normal,
            kicks = self.tracker.kick_count,
            "wall-kick"
        );
        true
    }

    fn update(&mut self, ctx: &mut MotionContext<'_>) -> Motion {
        self.air.update(ctx)
    }

    /// The kick lasts while the body is airborne and still rising.
    fn try_exit(&mut self, ctx: &mut MotionContext<'_>) -> bool {
        ctx.ground.grounded || ctx.body.vertical_velocity <= 0.0
    }
}
