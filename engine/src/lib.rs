//! First-Person Locomotion Library
//!
//! A frame-stepped character locomotion core: grounded walk/run, slope
//! sliding, airborne momentum, wall-kicks, ledge climbs, crouching and slides,
//! plus the camera response that goes with them. It knows nothing about
//! windows, devices or renderers; input arrives through an
//! [`InputLatch`](input::InputLatch) and world geometry through a
//! [`CollisionProvider`](physics::CollisionProvider).
//!
//! # Modules
//!
//! - [`player`] - Body, controller, locomotion state machine and maneuvers
//! - [`camera`] - Camera response pipeline (pitch, tilt, head bob, landing bump)
//! - [`probe`] - Multi-ray ground and wall queries
//! - [`physics`] - Collision provider trait and a static box/plane world
//! - [`input`] - Per-tick input latch
//! - [`config`] - Tuning sections and JSON loading
//! - [`math`] - Scalar interpolation and critically damped smoothing
//!
//! # Example
//!
//! ```ignore
//! use fps_locomotion::{FirstPersonController, LocomotionConfig, StaticWorld};
//! use fps_locomotion::input::ActionEvent;
//! use glam::{Vec2, Vec3};
//!
//! let config = LocomotionConfig::load("tuning/player.json")?;
//! let mut world = StaticWorld::with_ground(0.0);
//! world.add_box(Vec3::new(-4.0, 0.0, -8.0), Vec3::new(4.0, 2.5, -6.0));
//!
//! let mut controller = FirstPersonController::new(&config, Vec3::ZERO);
//! controller.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
//! controller.input_mut().push(ActionEvent::SprintStarted);
//!
//! let out = controller.tick(&world, 1.0 / 60.0);
//! println!("{} at {:?}", out.mode, out.position);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod probe;

pub use camera::{CameraPose, CameraResponse};
pub use config::{ConfigError, LocomotionConfig};
pub use input::{ActionEvent, FrameInput, InputLatch};
pub use physics::{CollisionProvider, LayerMask, RayHit, StaticWorld};
pub use player::{Body, FirstPersonController, FrameOutput, LocomotionMode};
pub use probe::{GroundState, SurfaceProbe};
