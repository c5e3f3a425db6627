//! Input Module
//!
//! The locomotion core does not read devices. A binding layer (winit, gilrs,
//! a replay file) translates whatever it receives into [`ActionEvent`]s, move
//! axes and look deltas, and pushes them into an [`InputLatch`]. The controller
//! drains the latch once per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use fps_locomotion::input::{ActionEvent, InputLatch};
//! use glam::Vec2;
//!
//! let mut latch = InputLatch::new();
//! latch.set_move_axis(Vec2::new(0.0, 1.0)); // W held
//! latch.push(ActionEvent::SprintStarted);
//! latch.accumulate_look(Vec2::new(2.5, 0.0));
//!
//! let frame = latch.take_frame();
//! ```

pub mod latch;

pub use latch::{ActionEvent, FrameInput, InputLatch};
