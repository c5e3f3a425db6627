//! Motion authority seam shared by the locomotion subsystems.
//!
//! Each tick exactly one [`Maneuver`] produces the body's [`Motion`]. The
//! arbitrator in [`locomotion`](super::locomotion) decides which one by asking
//! candidates to `try_enter` and the active one to `try_exit`.

use glam::Vec3;

use super::body::Body;
use super::crouch::CrouchController;
use crate::input::FrameInput;
use crate::physics::CollisionProvider;
use crate::probe::{GroundState, SurfaceProbe};

/// Ray from the eye along the camera's look direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Displacement requested by the maneuver holding authority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Sweep the body by this delta through `move_and_collide`
    Sweep(Vec3),
    /// Place the body at this position, ignoring collision
    Teleport(Vec3),
}

impl Motion {
    pub const NONE: Motion = Motion::Sweep(Vec3::ZERO);
}

/// Everything a maneuver may read or mutate during one tick.
pub struct MotionContext<'a> {
    pub body: &'a mut Body,
    pub crouch: &'a mut CrouchController,
    pub world: &'a dyn CollisionProvider,
    pub probe: &'a SurfaceProbe,
    pub ground: GroundState,
    pub input: &'a FrameInput,
    /// Camera-relative horizontal intent (zero for degenerate input)
    pub move_dir: Vec3,
    /// Horizontal speed for the current stance
    pub speed: f32,
    pub view: ViewRay,
    pub dt: f32,
}

/// Uniform capability exposed by every locomotion subsystem.
pub trait Maneuver {
    /// Try to take motion authority this tick. Entry actions run here.
    fn try_enter(&mut self, ctx: &mut MotionContext<'_>) -> bool;

    /// Advance one tick while holding authority.
    fn update(&mut self, ctx: &mut MotionContext<'_>) -> Motion;

    /// Give up authority if finished. Exit actions run here.
    fn try_exit(&mut self, ctx: &mut MotionContext<'_>) -> bool;
}
