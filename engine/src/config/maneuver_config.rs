//! Special-move tuning: wall-kick, ledge climb and slide.

use serde::{Deserialize, Serialize};

/// Wall-kick tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallKickTuning {
    /// Kicks allowed per airborne stretch
    pub max_wall_kicks: u32,
    /// Vertical velocity set by a kick
    pub kick_force: f32,
    /// Extra vertical velocity per kick already taken
    pub kick_force_increment: f32,
    /// Horizontal speed pushed away from the wall
    pub horizontal_push: f32,
    /// Wall probe range in meters
    pub wall_check_distance: f32,
    /// Normals closer than this angle count as the same wall
    pub normal_tolerance_deg: f32,
}

impl Default for WallKickTuning {
    fn default() -> Self {
        Self {
            max_wall_kicks: 1,
            kick_force: 9.0,
            kick_force_increment: 0.0,
            horizontal_push: 8.0,
            wall_check_distance: 1.0,
            // 0.1 of a right angle
            normal_tolerance_deg: 9.0,
        }
    }
}

/// Ledge detection and climb transition tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgeClimbTuning {
    /// Forward ray length from the eye
    pub check_distance: f32,
    /// Downward ray starts this far above the wall hit
    pub check_height: f32,
    /// Downward ray reaches this far past `check_height`
    pub extra_drop: f32,
    /// Ledge must be strictly higher than this above the feet
    pub min_climb_height: f32,
    /// Ledge must be strictly lower than this above the feet
    pub max_climb_height: f32,
    /// Minimum `dot(look, -wall_normal)` to count as facing the wall
    pub facing_dot: f32,
    /// Seconds spent moving onto the ledge
    pub duration: f32,
    /// How far past the ledge edge the body ends up
    pub forward_overshoot: f32,
    /// Jump must be held this long before a held-jump climb is attempted
    pub hold_threshold: f32,
}

impl Default for LedgeClimbTuning {
    fn default() -> Self {
        Self {
            check_distance: 1.2,
            check_height: 2.0,
            extra_drop: 0.5,
            min_climb_height: 1.0,
            max_climb_height: 2.7,
            facing_dot: 0.7,
            duration: 0.3,
            forward_overshoot: 0.5,
            hold_threshold: 0.1,
        }
    }
}

/// Slide tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideTuning {
    /// Start speed as a multiple of sprint speed
    pub boost_factor: f32,
    /// Linear speed decay in m/s²
    pub decay_rate: f32,
    /// Hard cap on slide length in seconds
    pub duration: f32,
    /// Slide ends once speed falls to this
    pub min_speed: f32,
    /// Fraction of gravity used as downward bias
    pub downward_bias: f32,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            boost_factor: 1.3,
            decay_rate: 10.0,
            duration: 1.2,
            min_speed: 1.5,
            downward_bias: 0.1,
        }
    }
}
