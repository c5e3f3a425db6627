//! Config Module
//!
//! Read-only tuning for every locomotion subsystem. A [`LocomotionConfig`] is
//! built once (from `Default` or a JSON tuning file) and handed by reference to
//! each subsystem's constructor; subsystems copy the section they need and never
//! reach back into a shared mutable record.
//!
//! # Example
//!
//! ```rust,ignore
//! use fps_locomotion::config::LocomotionConfig;
//!
//! let config = LocomotionConfig::load("tuning/player.json")?;
//! let controller = FirstPersonController::new(&config, spawn_position);
//! ```

pub mod camera_config;
pub mod error;
pub mod maneuver_config;
pub mod movement_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use camera_config::CameraTuning;
pub use error::ConfigError;
pub use maneuver_config::{LedgeClimbTuning, SlideTuning, WallKickTuning};
pub use movement_config::{BodyTuning, CrouchTuning, MovementTuning, ProbeTuning};

/// Complete tuning for one first-person body.
///
/// Every section has `#[serde(default)]`, so a tuning file only needs the
/// values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub body: BodyTuning,
    pub movement: MovementTuning,
    pub probe: ProbeTuning,
    pub crouch: CrouchTuning,
    pub wall_kick: WallKickTuning,
    pub ledge_climb: LedgeClimbTuning,
    pub slide: SlideTuning,
    pub camera: CameraTuning,
}

impl LocomotionConfig {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded locomotion tuning");
        Ok(config)
    }

    /// Serialize to pretty JSON (handy for dumping the defaults as a template).
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the preconditions the locomotion core relies on.
    ///
    /// The runtime never re-checks these; a config that fails here must not be
    /// used to build a controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.body;
        positive("body.radius", b.radius)?;
        positive("body.crouch_height", b.crouch_height)?;
        if b.standing_height < b.crouch_height {
            return Err(ConfigError::invalid(
                "body.standing_height",
                format!(
                    "standing height {} is below crouch height {}",
                    b.standing_height, b.crouch_height
                ),
            ));
        }

        let m = &self.movement;
        non_negative("movement.walk_speed", m.walk_speed)?;
        non_negative("movement.sprint_speed", m.sprint_speed)?;
        non_negative("movement.crouch_speed", m.crouch_speed)?;
        non_negative("movement.jump_height", m.jump_height)?;
        non_negative("movement.steep_slide_speed", m.steep_slide_speed)?;
        positive("movement.max_delta_time", m.max_delta_time)?;
        if m.gravity >= 0.0 {
            return Err(ConfigError::invalid(
                "movement.gravity",
                format!("gravity must point down (negative), got {}", m.gravity),
            ));
        }
        if !(0.0..=1.0).contains(&m.air_drag) {
            return Err(ConfigError::invalid(
                "movement.air_drag",
                format!("per-tick drag must be within [0, 1], got {}", m.air_drag),
            ));
        }
        let slopes = [
            m.max_slope_angle_deg,
            m.slope_limit_deg,
            self.probe.probe_slope_limit_deg,
        ];
        if slopes.windows(2).any(|w| w[0] > w[1]) || slopes[0] < 0.0 || slopes[2] > 90.0 {
            return Err(ConfigError::invalid(
                "movement.slope_limit_deg",
                format!(
                    "expected 0 <= max_slope_angle ({}) <= slope_limit ({}) <= probe_slope_limit ({}) <= 90",
                    slopes[0], slopes[1], slopes[2]
                ),
            ));
        }

        non_negative("probe.ground_check_distance", self.probe.ground_check_distance)?;
        positive("crouch.transition_speed", self.crouch.transition_speed)?;

        let w = &self.wall_kick;
        non_negative("wall_kick.wall_check_distance", w.wall_check_distance)?;
        if w.max_wall_kicks == 0 {
            tracing::warn!("wall_kick.max_wall_kicks is 0, wall-kicks are disabled");
        }

        let l = &self.ledge_climb;
        positive("ledge_climb.duration", l.duration)?;
        non_negative("ledge_climb.hold_threshold", l.hold_threshold)?;
        if l.min_climb_height >= l.max_climb_height {
            return Err(ConfigError::invalid(
                "ledge_climb.min_climb_height",
                format!(
                    "climb window ({}, {}) is empty",
                    l.min_climb_height, l.max_climb_height
                ),
            ));
        }

        let s = &self.slide;
        positive("slide.duration", s.duration)?;
        non_negative("slide.decay_rate", s.decay_rate)?;
        non_negative("slide.min_speed", s.min_speed)?;

        let c = &self.camera;
        if c.min_pitch_deg > c.max_pitch_deg {
            return Err(ConfigError::invalid(
                "camera.min_pitch_deg",
                format!("min pitch {} exceeds max pitch {}", c.min_pitch_deg, c.max_pitch_deg),
            ));
        }
        positive("camera.tilt_smooth_time", c.tilt_smooth_time)?;
        positive("camera.jump_fall_smooth_time", c.jump_fall_smooth_time)?;
        positive("camera.bump_recovery_time", c.bump_recovery_time)?;
        positive("camera.landing_divisor", c.landing_divisor)?;
        if c.min_bump > c.max_bump {
            return Err(ConfigError::invalid(
                "camera.min_bump",
                format!("min bump {} exceeds max bump {}", c.min_bump, c.max_bump),
            ));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be > 0, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")))
    }
}
