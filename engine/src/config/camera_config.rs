//! Camera response tuning.
//!
//! Angles are in degrees. Positive rotation about the camera's X axis looks up,
//! so tilts that dip the view are negative.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tuning for the camera response pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    // Look
    /// Degrees of rotation per unit of look delta
    pub look_sensitivity: f32,
    /// Lowest pitch (looking down)
    pub min_pitch_deg: f32,
    /// Highest pitch (looking up)
    pub max_pitch_deg: f32,
    /// Camera local position relative to the body feet when standing
    pub eye_offset: Vec3,

    // Movement tilt
    /// Roll at full strafe input
    pub max_roll_deg: f32,
    /// Pitch dip at full forward input
    pub max_forward_tilt_deg: f32,
    /// Smoothing time for roll and forward tilt
    pub tilt_smooth_time: f32,

    // Jump/fall tilt
    /// Target tilt while rising
    pub rise_tilt_deg: f32,
    /// Target tilt while falling
    pub fall_tilt_deg: f32,
    /// Smoothing time for jump/fall tilt
    pub jump_fall_smooth_time: f32,
    /// Per-tick vertical delta that counts as rising or falling
    pub vertical_motion_threshold: f32,

    // Landing bump
    /// Per-tick drop that counts as a landing
    pub landing_threshold: f32,
    /// Fall distance divisor for bump strength
    pub landing_divisor: f32,
    /// Smallest bump applied on landing
    pub min_bump: f32,
    /// Largest bump applied on landing
    pub max_bump: f32,
    /// Smoothing time of bump recovery
    pub bump_recovery_time: f32,

    // Head bob
    /// Phase advance rate while walking (radians per second)
    pub walk_bob_speed: f32,
    /// Phase advance rate while sprinting
    pub sprint_bob_speed: f32,
    /// Bob amplitude while walking
    pub walk_bob_amount: f32,
    /// Bob amplitude while sprinting
    pub sprint_bob_amount: f32,
    /// Move input magnitude above which head bob runs
    pub bob_input_threshold: f32,
    /// Lerp rate of the camera local position toward its target
    pub bob_blend_rate: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            look_sensitivity: 1.0,
            min_pitch_deg: -80.0,
            max_pitch_deg: 70.0,
            eye_offset: Vec3::new(0.0, 1.6, 0.0),

            max_roll_deg: 1.0,
            max_forward_tilt_deg: 1.0,
            tilt_smooth_time: 0.2,

            rise_tilt_deg: -2.0,
            fall_tilt_deg: 2.0,
            jump_fall_smooth_time: 0.25,
            vertical_motion_threshold: 0.01,

            landing_threshold: 0.1,
            landing_divisor: 3.0,
            min_bump: 0.05,
            max_bump: 0.3,
            bump_recovery_time: 0.15,

            walk_bob_speed: 10.0,
            sprint_bob_speed: 25.0,
            walk_bob_amount: 0.1,
            sprint_bob_amount: 0.15,
            bob_input_threshold: 0.1,
            bob_blend_rate: 5.0,
        }
    }
}
