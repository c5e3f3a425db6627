//! Camera Response Pipeline
//!
//! Turns look input and post-motion locomotion state into the first-person
//! camera's local pose. It is a one-way consumer: it reads a
//! [`CameraInput`] snapshot and never touches the body or ground state.
//!
//! Per tick:
//! - pitch accumulates from look input and is clamped
//! - roll and forward tilt track strafe/forward input through critically
//!   damped filters
//! - jump/fall tilt leans the view while rising or falling
//! - head bob advances while moving on the ground and resets when stopped
//! - a landing bump dips the eye proportional to the fall, then recovers
//!
//! Angles are degrees, positive pitch looks up.

use glam::{Quat, Vec2, Vec3};

use crate::config::{CameraTuning, LocomotionConfig};
use crate::math::{blend_factor, smooth_damp};

/// Locomotion snapshot read by the camera each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraInput {
    pub look_delta: Vec2,
    pub move_axis: Vec2,
    /// Post-motion grounded flag
    pub grounded: bool,
    pub sprinting: bool,
    /// Body height change over this tick
    pub vertical_delta: f32,
    /// Crouch eye height multiplier
    pub eye_height_factor: f32,
}

/// Camera transform relative to the body, ready for the scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub local_position: Vec3,
    pub local_rotation: Quat,
}

impl CameraPose {
    /// Look direction in body-local space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.local_rotation * Vec3::NEG_Z
    }
}

/// Persistent camera state. Every damped quantity carries its filter velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    pub pitch: f32,
    pub roll_tilt: f32,
    pub roll_velocity: f32,
    pub forward_tilt: f32,
    pub forward_tilt_velocity: f32,
    pub jump_fall_tilt: f32,
    pub jump_fall_velocity: f32,
    pub head_bob_phase: f32,
    pub landing_bump: f32,
    pub landing_bump_velocity: f32,
    /// Distance descended since last leaving the ground
    pub fall_distance: f32,
    pub was_grounded: bool,
    /// Blended eye position before the landing bump is applied
    pub smoothed_local_position: Vec3,
}

/// Landing bump for a fall of `distance` meters.
#[inline]
pub fn landing_bump_for(distance: f32, tuning: &CameraTuning) -> f32 {
    (distance.max(0.0) / tuning.landing_divisor).clamp(tuning.min_bump, tuning.max_bump)
}

#[derive(Debug, Clone)]
pub struct CameraResponse {
    tuning: CameraTuning,
    state: CameraState,
    pose: CameraPose,
}

impl CameraResponse {
    pub fn new(config: &LocomotionConfig) -> Self {
        let tuning = config.camera;
        let state = CameraState {
            was_grounded: true,
            smoothed_local_position: tuning.eye_offset,
            ..Default::default()
        };
        Self {
            tuning,
            state,
            pose: CameraPose {
                local_position: tuning.eye_offset,
                local_rotation: Quat::IDENTITY,
            },
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Pose produced by the most recent update.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn pitch_deg(&self) -> f32 {
        self.state.pitch
    }

    /// Keep the pose frozen for a tick (e.g. while climbing). Fall tracking
    /// restarts so resuming does not read the suspension as a landing.
    pub fn hold(&mut self, grounded: bool) {
        self.state.was_grounded = grounded;
        self.state.fall_distance = 0.0;
    }

    pub fn update(&mut self, input: &CameraInput, dt: f32) -> CameraPose {
        let t = self.tuning;

        self.update_pitch(input.look_delta.y);
        self.update_move_tilt(input.move_axis, dt);
        self.update_jump_fall_tilt(input, dt);
        self.update_landing(input, dt);
        let bob = self.update_head_bob(input, dt);

        let mut base = t.eye_offset;
        base.y *= input.eye_height_factor;
        let s = &mut self.state;
        s.smoothed_local_position = s
            .smoothed_local_position
            .lerp(base + bob, blend_factor(t.bob_blend_rate, dt));

        let pitch_total = s.pitch + s.jump_fall_tilt + s.forward_tilt;
        self.pose = CameraPose {
            local_position: s.smoothed_local_position - Vec3::Y * s.landing_bump,
            local_rotation: Quat::from_rotation_x(pitch_total.to_radians())
                * Quat::from_rotation_z(s.roll_tilt.to_radians()),
        };
        self.pose
    }

    fn update_pitch(&mut self, look_y: f32) {
        let t = &self.tuning;
        let delta = look_y * t.look_sensitivity;
        if delta.is_finite() {
            self.state.pitch += delta;
        }
        self.state.pitch = self.state.pitch.clamp(t.min_pitch_deg, t.max_pitch_deg);
    }

    fn update_move_tilt(&mut self, move_axis: Vec2, dt: f32) {
        let t = &self.tuning;
        let s = &mut self.state;
        s.roll_tilt = smooth_damp(
            s.roll_tilt,
            -move_axis.x * t.max_roll_deg,
            &mut s.roll_velocity,
            t.tilt_smooth_time,
            dt,
        );
        s.forward_tilt = smooth_damp(
            s.forward_tilt,
            -move_axis.y * t.max_forward_tilt_deg,
            &mut s.forward_tilt_velocity,
            t.tilt_smooth_time,
            dt,
        );
    }

    fn update_jump_fall_tilt(&mut self, input: &CameraInput, dt: f32) {
        let t = &self.tuning;
        let target = if input.grounded {
            Some(0.0)
        } else if input.vertical_delta > t.vertical_motion_threshold {
            Some(t.rise_tilt_deg)
        } else if input.vertical_delta < -t.vertical_motion_threshold {
            Some(t.fall_tilt_deg)
        } else {
            // Hovering at the apex: hold the current lean
            None
        };

        if let Some(target) = target {
            let s = &mut self.state;
            s.jump_fall_tilt = smooth_damp(
                s.jump_fall_tilt,
                target,
                &mut s.jump_fall_velocity,
                t.jump_fall_smooth_time,
                dt,
            );
        }
    }

    fn update_landing(&mut self, input: &CameraInput, dt: f32) {
        let t = self.tuning;
        let s = &mut self.state;

        if !input.grounded {
            if input.vertical_delta < 0.0 {
                s.fall_distance += -input.vertical_delta;
            }
        } else if !s.was_grounded {
            let fall = s.fall_distance.max(-input.vertical_delta);
            if fall > t.landing_threshold {
                s.landing_bump = landing_bump_for(fall, &t);
                s.landing_bump_velocity = 0.0;
                tracing::trace!(fall, bump = s.landing_bump, "landing bump");
            }
            s.fall_distance = 0.0;
        }
        s.was_grounded = input.grounded;

        let relaxed = smooth_damp(
            s.landing_bump,
            0.0,
            &mut s.landing_bump_velocity,
            t.bump_recovery_time,
            dt,
        );
        // Recovery only ever moves toward zero
        s.landing_bump = relaxed.clamp(0.0, s.landing_bump.max(0.0));
    }

    fn update_head_bob(&mut self, input: &CameraInput, dt: f32) -> Vec3 {
        let t = &self.tuning;
        let s = &mut self.state;

        if !input.grounded || input.move_axis.length() <= t.bob_input_threshold {
            s.head_bob_phase = 0.0;
            return Vec3::ZERO;
        }

        let (speed, amount) = if input.sprinting {
            (t.sprint_bob_speed, t.sprint_bob_amount)
        } else {
            (t.walk_bob_speed, t.walk_bob_amount)
        };
        s.head_bob_phase += dt * speed;

        Vec3::new(
            (s.head_bob_phase * 0.5).cos() * amount * 0.5,
            s.head_bob_phase.sin() * amount,
            0.0,
        )
    }
}
