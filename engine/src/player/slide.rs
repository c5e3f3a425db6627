//! Slide
//!
//! Pressing crouch while sprinting on the ground drops into a slide: the
//! direction locks to the facing at the moment of entry and the speed starts
//! above sprint speed, then bleeds off linearly. The body is held crouched for
//! the whole slide.

use glam::Vec3;

use super::crouch::CrouchController;
use super::maneuver::{Maneuver, Motion, MotionContext};
use crate::config::{LocomotionConfig, SlideTuning};
use crate::math::move_towards;

/// One in-progress slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSession {
    /// Horizontal unit direction, fixed at entry
    pub direction: Vec3,
    pub current_speed: f32,
    pub elapsed: f32,
}

impl SlideSession {
    pub fn new(direction: Vec3, speed: f32) -> Self {
        Self {
            direction,
            current_speed: speed,
            elapsed: 0.0,
        }
    }

    /// Decay speed and advance the clock.
    pub fn advance(&mut self, decay_rate: f32, dt: f32) {
        self.elapsed += dt;
        self.current_speed = move_towards(self.current_speed, 0.0, decay_rate * dt);
    }

    /// True once the slide has run out of speed or time, or left the ground.
    pub fn is_finished(&self, tuning: &SlideTuning, grounded: bool) -> bool {
        self.current_speed <= tuning.min_speed || self.elapsed >= tuning.duration || !grounded
    }
}

#[derive(Debug, Clone)]
pub struct Slide {
    tuning: SlideTuning,
    sprint_speed: f32,
    gravity: f32,
    session: Option<SlideSession>,
}

impl Slide {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            tuning: config.slide,
            sprint_speed: config.movement.sprint_speed,
            gravity: config.movement.gravity,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&SlideSession> {
        self.session.as_ref()
    }

    pub fn is_sliding(&self) -> bool {
        self.session.is_some()
    }

    /// End the slide early (jumping out of it, leaving the ground, being
    /// teleported) and hand crouch back to the player's input.
    pub fn cancel(&mut self, crouch: &mut CrouchController) {
        if self.session.take().is_some() {
            crouch.release_force();
            tracing::debug!("slide canceled");
        }
    }
}

impl Maneuver for Slide {
    fn try_enter(&mut self, ctx: &mut MotionContext<'_>) -> bool {
        if self.session.is_some()
            || !ctx.input.crouch_pressed
            || !ctx.input.sprint_held
            || !ctx.ground.grounded
        {
            return false;
        }

        let direction = ctx.body.forward();
        let speed = self.sprint_speed * self.tuning.boost_factor;
        self.session = Some(SlideSession::new(direction, speed));
        ctx.crouch.force_crouch();

        tracing::debug!(?direction, speed, "slide started");
        true
    }

    fn update(&mut self, ctx: &mut MotionContext<'_>) -> Motion {
        let Some(session) = self.session.as_mut() else {
            return Motion::NONE;
        };
        session.advance(self.tuning.decay_rate, ctx.dt);

        let mut velocity = session.direction * session.current_speed;
        // Small pull toward the ground so declines don't launch the body
        velocity.y += self.gravity * self.tuning.downward_bias * ctx.dt;
        Motion::Sweep(velocity * ctx.dt)
    }

    fn try_exit(&mut self, ctx: &mut MotionContext<'_>) -> bool {
        let Some(session) = self.session else {
            return true;
        };
        if !session.is_finished(&self.tuning, ctx.ground.grounded) {
            return false;
        }

        self.session = None;
        ctx.crouch.release_force();
        tracing::debug!(
            speed = session.current_speed,
            elapsed = session.elapsed,
            grounded = ctx.ground.grounded,
            "slide ended"
        );
        true
    }
}
