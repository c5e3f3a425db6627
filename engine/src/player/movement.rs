//! Movement Integrator
//!
//! Default owner of the body's motion: walking, running and crouch-walking on
//! the ground, forced sliding down over-steep slopes, and momentum-based air
//! control.
//!
//! # Slope bands
//!
//! | slope angle                           | behavior                              |
//! |---------------------------------------|---------------------------------------|
//! | `<= max_slope_angle_deg`              | full input, vertical velocity pinned  |
//! | `max_slope_angle_deg..slope_limit_deg`| upslope input dropped, rest halved    |
//! | `> slope_limit_deg`                   | input ignored, slide down the surface |
//!
//! The probe stops reporting ground above its own limit, at which point the
//! body is airborne.

use glam::Vec3;

use super::body::Body;
use super::maneuver::{Maneuver, Motion, MotionContext};
use crate::config::{LocomotionConfig, MovementTuning};
use crate::math::project_on_plane;
use crate::probe::GroundState;

#[derive(Debug, Clone)]
pub struct MovementIntegrator {
    tuning: MovementTuning,
}

impl MovementIntegrator {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            tuning: config.movement,
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Launch a jump. Only allowed while grounded and not already rising off
    /// the ground; returns whether it fired.
    pub fn jump(&self, body: &mut Body, ground: &GroundState) -> bool {
        if !ground.grounded || body.vertical_velocity > 0.0 {
            return false;
        }
        body.vertical_velocity = self.tuning.jump_velocity();
        tracing::debug!(velocity = body.vertical_velocity, "jump");
        true
    }

    /// Advance vertical velocity by one tick.
    pub fn integrate_vertical(&self, body: &mut Body, ground: &GroundState, dt: f32) {
        let t = &self.tuning;
        if ground.grounded && body.vertical_velocity < 0.0 {
            if ground.slope_angle_deg <= t.max_slope_angle_deg {
                body.vertical_velocity = t.ground_stick_velocity;
                body.air_momentum = Vec3::ZERO;
            } else if body.gravity_enabled {
                // Half gravity keeps the body pressed onto steep ground
                body.vertical_velocity += t.gravity * 0.5 * dt;
            }
        } else if body.gravity_enabled {
            body.vertical_velocity += t.gravity * dt;
        }
    }

    /// Horizontal velocity for this tick. Updates air momentum when airborne.
    pub fn horizontal_velocity(
        &self,
        body: &mut Body,
        ground: &GroundState,
        move_dir: Vec3,
        speed: f32,
    ) -> Vec3 {
        let t = &self.tuning;

        if !ground.grounded {
            let mut momentum = body.air_momentum * t.air_drag;
            momentum += move_dir * t.air_control * speed;
            body.air_momentum = momentum.clamp_length_max(speed);
            return body.air_momentum;
        }

        let normal = ground.surface_normal;
        if ground.slope_angle_deg > t.slope_limit_deg {
            let downhill = project_on_plane(Vec3::NEG_Y, normal).normalize_or_zero();
            return downhill * t.steep_slide_speed;
        }

        let mut dir = project_on_plane(move_dir, normal).normalize_or_zero();
        if ground.slope_angle_deg > t.max_slope_angle_deg {
            if dir.dot(body.forward()) > t.upslope_block_dot {
                dir = Vec3::ZERO;
            } else {
                dir *= t.steep_input_scale;
            }
        }
        dir * speed
    }
}

impl Maneuver for MovementIntegrator {
    /// Always available: this is the fallback owner of motion.
    fn try_enter(&mut self, _ctx: &mut MotionContext<'_>) -> bool {
        true
    }

    fn update(&mut self, ctx: &mut MotionContext<'_>) -> Motion {
        self.integrate_vertical(ctx.body, &ctx.ground, ctx.dt);
        let horizontal = self.horizontal_velocity(ctx.body, &ctx.ground, ctx.move_dir, ctx.speed);
        Motion::Sweep((horizontal + Vec3::Y * ctx.body.vertical_velocity) * ctx.dt)
    }

    fn try_exit(&mut self, _ctx: &mut MotionContext<'_>) -> bool {
        false
    }
}
