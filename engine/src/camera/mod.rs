//! Camera Module
//!
//! First-person camera response. The camera is a child of the body: the body
//! carries yaw, the camera carries pitch plus the cosmetic layers (tilt, head
//! bob, landing bump) on top of the eye offset. Everything here works in the
//! body's local space and never mutates locomotion state.

pub mod response;

pub use response::{CameraInput, CameraPose, CameraResponse, CameraState, landing_bump_for};
