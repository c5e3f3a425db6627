//! Movement Configuration
//!
//! Body dimensions, ground movement, probing and crouch tuning.
//! Defaults match the feel the locomotion core was tuned against:
//! 5 m/s walk, 10 m/s sprint, -40 m/s² gravity and a 2 m jump.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::LayerMask;

/// Capsule dimensions of the kinematic body.
///
/// `position` of a [`Body`](crate::player::Body) is the feet point; the
/// collider extends `height` upward from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    /// Capsule radius in meters
    pub radius: f32,
    /// Collider height when standing
    pub standing_height: f32,
    /// Collider height when fully crouched
    pub crouch_height: f32,
    /// Collider center (relative to feet) when standing
    pub standing_center: Vec3,
    /// Collider center (relative to feet) when crouched
    pub crouch_center: Vec3,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            radius: 0.5,
            standing_height: 2.0,
            crouch_height: 1.0,
            standing_center: Vec3::new(0.0, 1.0, 0.0),
            crouch_center: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}

/// Ground, air and jump tuning for the movement integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Walk speed in m/s
    pub walk_speed: f32,
    /// Sprint speed in m/s
    pub sprint_speed: f32,
    /// Speed while crouched in m/s
    pub crouch_speed: f32,
    /// Signed vertical acceleration in m/s² (negative = down)
    pub gravity: f32,
    /// Apex height of a standing jump in meters
    pub jump_height: f32,
    /// Vertical velocity pinned while grounded on walkable ground
    pub ground_stick_velocity: f32,
    /// Per-tick multiplier applied to air momentum (1.0 = no damping)
    pub air_drag: f32,
    /// Fraction of desired velocity added to air momentum each tick
    pub air_control: f32,
    /// Speed of the forced slide down slopes steeper than `slope_limit_deg`
    pub steep_slide_speed: f32,
    /// Steepest slope that is fully walkable
    pub max_slope_angle_deg: f32,
    /// Slopes steeper than this force the body to slide down
    pub slope_limit_deg: f32,
    /// Upslope input is dropped above `max_slope_angle_deg` when the
    /// projected direction aligns with forward by more than this
    pub upslope_block_dot: f32,
    /// Input scale for non-upslope movement on over-steep slopes
    pub steep_input_scale: f32,
    /// Largest delta time a single tick will integrate
    pub max_delta_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_speed: 10.0,
            crouch_speed: 2.0,
            gravity: -40.0,
            jump_height: 2.0,
            ground_stick_velocity: -5.0,
            air_drag: 1.0,
            air_control: 0.3,
            steep_slide_speed: 5.0,
            max_slope_angle_deg: 45.0,
            slope_limit_deg: 60.0,
            upslope_block_dot: 0.3,
            steep_input_scale: 0.5,
            max_delta_time: 0.1,
        }
    }
}

impl MovementTuning {
    /// Initial vertical velocity of a jump: `sqrt(2·h·|g|)`.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity.abs()).sqrt()
    }

    /// Select the horizontal speed for the current stance.
    #[inline]
    pub fn speed(&self, crouching: bool, sprinting: bool) -> f32 {
        if crouching {
            self.crouch_speed
        } else if sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }
}

/// Ray layout of the surface probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeTuning {
    /// How far below the feet a surface still counts as ground
    pub ground_check_distance: f32,
    /// Rays start this far above the feet and are this much longer
    pub ray_margin: f32,
    /// Side ray offset as a fraction of body radius
    pub ray_offset_factor: f32,
    /// A hit only grounds the body when its slope is below this angle
    pub probe_slope_limit_deg: f32,
    /// Height above the feet of the wall probe rays
    pub wall_probe_height: f32,
    /// Layers that count as ground, walls and ledges
    pub surface_mask: LayerMask,
}

impl Default for ProbeTuning {
    fn default() -> Self {
        Self {
            ground_check_distance: 0.3,
            ray_margin: 0.1,
            ray_offset_factor: 0.5,
            probe_slope_limit_deg: 75.0,
            wall_probe_height: 1.0,
            surface_mask: LayerMask::ALL,
        }
    }
}

/// Crouch pose transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrouchTuning {
    /// Lerp rate per second toward the target pose
    pub transition_speed: f32,
    /// Visual model Y scale when crouched
    pub crouched_visual_scale: f32,
    /// Eye height factor when crouched (multiplies the camera base height)
    pub crouched_eye_factor: f32,
    /// Height must be within this of crouch height to report crouched
    pub converge_tolerance: f32,
    /// Clearance sphere radius as a fraction of body radius
    pub clearance_radius_factor: f32,
}

impl Default for CrouchTuning {
    fn default() -> Self {
        Self {
            transition_speed: 8.0,
            crouched_visual_scale: 0.5,
            crouched_eye_factor: 0.5,
            converge_tolerance: 0.1,
            clearance_radius_factor: 0.9,
        }
    }
}
