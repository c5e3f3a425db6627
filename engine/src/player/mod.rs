//! Player Module
//!
//! Character locomotion: the kinematic body, the per-tick controller and the
//! maneuvers that take turns owning the body's motion.
//!
//! # Components
//!
//! - [`FirstPersonController`] - Per-tick driver producing a [`FrameOutput`]
//! - [`Locomotion`] - Mode state machine arbitrating motion authority
//!   - [`MovementIntegrator`] - Walk/run, slopes, gravity, jump, air momentum
//!   - [`WallKick`] - Airborne jump off a nearby wall, limited per airtime
//!   - [`LedgeClimb`] - Timed climb onto a ledge in view
//!   - [`Slide`] - Crouch-while-sprinting burst with linear decay
//! - [`CrouchController`] - Crouch request with ceiling-aware stand-up
//! - [`Body`] - Kinematic body state shared by all of the above

pub mod body;
pub mod controller;
pub mod crouch;
pub mod ledge_climb;
pub mod locomotion;
pub mod maneuver;
pub mod movement;
pub mod slide;
pub mod wall_kick;

pub use body::Body;
pub use controller::{FirstPersonController, FrameOutput};
pub use crouch::CrouchController;
pub use ledge_climb::{ClimbSession, LedgeClimb};
pub use locomotion::{Locomotion, LocomotionMode};
pub use maneuver::{Maneuver, Motion, MotionContext, ViewRay};
pub use movement::MovementIntegrator;
pub use slide::{Slide, SlideSession};
pub use wall_kick::{WallKick, WallKickImpulse, WallKickTracker};
