//! Player Crouch System
//!
//! Binary crouch request with smooth pose transitions.
//!
//! # Pose
//!
//! - Standing: 2.0m collider, full-height model and eye
//! - Crouched: 1.0m collider, model scaled to 0.5 and eye lowered to half height
//!
//! Collider height, collider center, model scale and eye height all lerp
//! toward the target pose with `t = min(dt * 8, 1)` every tick, so the speed of
//! the transition does not depend on frame rate.
//!
//! # Standing up
//!
//! Releasing crouch only records the request. The pose switches back to
//! standing once a sphere swept upward from the body's middle reaches the
//! standing height without touching anything, so the collider never grows
//! into a ceiling.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut crouch = CrouchController::new(&config);
//!
//! // Input edges:
//! crouch.set_crouching(true);
//!
//! // Each tick:
//! crouch.update(&mut body, &world, dt);
//! let speed = config.movement.speed(crouch.is_crouching(), sprinting);
//! ```

use glam::Vec3;

use super::body::Body;
use crate::config::{BodyTuning, CrouchTuning, LocomotionConfig};
use crate::math::{blend_factor, lerp};
use crate::physics::{CollisionProvider, LayerMask};

/// Manages the crouch request and the body's pose transition.
#[derive(Debug, Clone)]
pub struct CrouchController {
    tuning: CrouchTuning,
    body: BodyTuning,

    /// Crouch input is currently held
    held: bool,
    /// Pose the body is transitioning toward
    target_crouched: bool,
    /// Another subsystem (slide) is holding the body down
    forced: bool,
    /// Current eye height multiplier (1 standing, `crouched_eye_factor` crouched)
    eye_factor: f32,
    /// Converged into the crouched pose
    crouching: bool,
    /// Layers the headroom sweep collides with
    mask: LayerMask,
}

impl CrouchController {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            tuning: config.crouch,
            body: config.body,
            held: false,
            target_crouched: false,
            forced: false,
            eye_factor: 1.0,
            crouching: false,
            mask: config.probe.surface_mask,
        }
    }

    /// Record the crouch input level. Pressing always crouches; releasing is
    /// honored once there is room to stand.
    pub fn set_crouching(&mut self, held: bool) {
        self.held = held;
        if held {
            self.target_crouched = true;
        }
    }

    /// Hold the body crouched regardless of input until [`release_force`](Self::release_force).
    pub fn force_crouch(&mut self) {
        self.forced = true;
        self.target_crouched = true;
    }

    /// Return control of the pose to the crouch input.
    pub fn release_force(&mut self) {
        self.forced = false;
    }

    /// A slide is holding the body crouched.
    pub fn is_forced(&self) -> bool {
        self.forced
    }

    /// Crouch input is held.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// The pose is heading toward crouched.
    pub fn wants_crouch(&self) -> bool {
        self.target_crouched
    }

    /// True once the collider has converged to the crouched height.
    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Multiplier for the camera's base eye height.
    pub fn eye_height_factor(&self) -> f32 {
        self.eye_factor
    }

    /// Sweep upward for room to stand.
    pub fn can_stand_up<W>(&self, body: &Body, world: &W) -> bool
    where
        W: CollisionProvider + ?Sized,
    {
        let check_distance = self.body.standing_height - body.height;
        if check_distance <= 0.0 {
            return true;
        }
        let start = body.position + Vec3::Y * (body.height * 0.5);
        let radius = body.radius * self.tuning.clearance_radius_factor;
        world
            .sphere_cast(start, radius, Vec3::Y, check_distance, self.mask)
            .is_none()
    }

    /// Resolve a pending stand-up and move the pose one tick toward its target.
    pub fn update<W>(&mut self, body: &mut Body, world: &W, dt: f32)
    where
        W: CollisionProvider + ?Sized,
    {
        if self.target_crouched && !self.held && !self.forced {
            if self.can_stand_up(body, world) {
                self.target_crouched = false;
                tracing::trace!("standing up");
            } else {
                tracing::trace!("stand-up deferred: no headroom");
            }
        }

        let (height, center, scale, eye) = if self.target_crouched {
            (
                self.body.crouch_height,
                self.body.crouch_center,
                self.tuning.crouched_visual_scale,
                self.tuning.crouched_eye_factor,
            )
        } else {
            (self.body.standing_height, self.body.standing_center, 1.0, 1.0)
        };

        let t = blend_factor(self.tuning.transition_speed, dt);
        body.height = lerp(body.height, height, t);
        body.center = body.center.lerp(center, t);
        body.visual_scale = lerp(body.visual_scale, scale, t);
        self.eye_factor = lerp(self.eye_factor, eye, t);

        self.crouching = self.target_crouched
            && (body.height - self.body.crouch_height).abs() < self.tuning.converge_tolerance;
    }
}
