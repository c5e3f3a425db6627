//! First-Person Controller
//!
//! Per-tick driver that ties the locomotion core together. Owns the body,
//! the input latch, the state machine and the camera response, and runs them
//! in a fixed order every tick:
//!
//! 1. clamp `dt` and take the latched input
//! 2. apply yaw from look input (not while climbing)
//! 3. feed crouch edges
//! 4. probe the ground, build the motion context and let the state machine
//!    pick and run the active maneuver
//! 5. apply the resulting motion (collision-aware sweep or teleport)
//! 6. advance the crouch pose, re-probe, and settle mode exits
//! 7. update the camera from the post-motion state
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion::{FirstPersonController, LocomotionConfig, StaticWorld};
//! use fps_locomotion::input::ActionEvent;
//!
//! let config = LocomotionConfig::default();
//! let world = StaticWorld::with_ground(0.0);
//! let mut controller = FirstPersonController::new(&config, Vec3::ZERO);
//!
//! // From the binding layer:
//! controller.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
//! controller.input_mut().push(ActionEvent::JumpStarted);
//!
//! // Each frame:
//! let out = controller.tick(&world, dt);
//! scene.set_body(out.position, out.yaw);
//! scene.set_camera_local(out.camera.local_position, out.camera.local_rotation);
//! ```

use std::f32::consts::TAU;

use glam::Vec3;

use super::body::Body;
use super::crouch::CrouchController;
use super::locomotion::{Locomotion, LocomotionMode};
use super::maneuver::{Motion, MotionContext, ViewRay};
use crate::camera::{CameraInput, CameraPose, CameraResponse};
use crate::config::{LocomotionConfig, MovementTuning};
use crate::input::InputLatch;
use crate::physics::CollisionProvider;
use crate::probe::{GroundState, SurfaceProbe};

/// Everything the scene graph needs after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Feet position in world space
    pub position: Vec3,
    /// Body yaw in radians
    pub yaw: f32,
    pub mode: LocomotionMode,
    /// Post-motion ground state
    pub ground: GroundState,
    /// Camera pose relative to the body
    pub camera: CameraPose,
}

pub struct FirstPersonController {
    movement: MovementTuning,
    look_sensitivity: f32,

    body: Body,
    latch: InputLatch,
    probe: SurfaceProbe,
    crouch: CrouchController,
    locomotion: Locomotion,
    camera: CameraResponse,

    /// Ground state after the most recent tick
    ground: GroundState,
}

impl FirstPersonController {
    /// Build a standing controller with its feet at `spawn`.
    pub fn new(config: &LocomotionConfig, spawn: Vec3) -> Self {
        tracing::debug!(?spawn, "first-person controller created");
        Self {
            movement: config.movement,
            look_sensitivity: config.camera.look_sensitivity,
            body: Body::from_tuning(spawn, &config.body),
            latch: InputLatch::new(),
            probe: SurfaceProbe::new(config),
            crouch: CrouchController::new(config),
            locomotion: Locomotion::new(config),
            camera: CameraResponse::new(config),
            ground: GroundState::AIRBORNE,
        }
    }

    /// Input latch for the binding layer to write into between ticks.
    pub fn input_mut(&mut self) -> &mut InputLatch {
        &mut self.latch
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn mode(&self) -> LocomotionMode {
        self.locomotion.mode()
    }

    pub fn ground(&self) -> &GroundState {
        &self.ground
    }

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    pub fn crouch(&self) -> &CrouchController {
        &self.crouch
    }

    pub fn camera(&self) -> &CameraResponse {
        &self.camera
    }

    /// Place the body at `position` and drop all velocity (respawn, portals).
    ///
    /// Ignored while a ledge climb owns the body.
    pub fn teleport(&mut self, position: Vec3) {
        if self.locomotion.is_climbing() {
            tracing::warn!(?position, "teleport ignored during ledge climb");
            return;
        }
        self.locomotion.interrupt(&mut self.crouch);
        self.body.position = position;
        self.body.vertical_velocity = 0.0;
        self.body.air_momentum = Vec3::ZERO;
    }

    /// Advance the character by one frame.
    pub fn tick(&mut self, world: &dyn CollisionProvider, dt: f32) -> FrameOutput {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.movement.max_delta_time)
        } else {
            0.0
        };
        let input = self.latch.take_frame();
        let climbing_at_start = self.locomotion.is_climbing();

        if !climbing_at_start {
            let yaw_delta = (input.look_delta.x * self.look_sensitivity).to_radians();
            if yaw_delta.is_finite() {
                self.body.yaw = (self.body.yaw + yaw_delta).rem_euclid(TAU);
            }
        }

        if input.crouch_pressed {
            self.crouch.set_crouching(true);
        }
        if input.crouch_released {
            self.crouch.set_crouching(input.crouch_held);
        }

        let start_y = self.body.position.y;
        let ground = self.probe_ground(world);

        let move_dir = if input.has_move_intent() {
            self.body.move_direction(input.move_axis)
        } else {
            Vec3::ZERO
        };
        let speed = self
            .movement
            .speed(self.crouch.is_crouching(), input.sprint_held);
        let view = self.view_ray();

        let mut ctx = MotionContext {
            body: &mut self.body,
            crouch: &mut self.crouch,
            world,
            probe: &self.probe,
            ground,
            input: &input,
            move_dir,
            speed,
            view,
            dt,
        };

        match self.locomotion.step(&mut ctx) {
            Motion::Sweep(delta) => {
                let moved = world.move_and_collide(&*ctx.body, delta);
                ctx.body.position += moved;
            }
            Motion::Teleport(position) => ctx.body.position = position,
        }

        if !self.locomotion.is_climbing() {
            ctx.crouch.update(&mut *ctx.body, world, dt);
        }

        ctx.ground = ctx.probe.query_ground(
            world,
            ctx.body.position,
            ctx.body.forward(),
            ctx.body.right(),
            ctx.body.radius,
        );
        self.locomotion.settle(&mut ctx);
        let ground = ctx.ground;
        self.ground = ground;

        if climbing_at_start || self.locomotion.is_climbing() {
            self.camera.hold(ground.grounded);
        } else {
            self.camera.update(
                &CameraInput {
                    look_delta: input.look_delta,
                    move_axis: input.move_axis,
                    grounded: ground.grounded,
                    sprinting: input.sprint_held,
                    vertical_delta: self.body.position.y - start_y,
                    eye_height_factor: self.crouch.eye_height_factor(),
                },
                dt,
            );
        }

        FrameOutput {
            position: self.body.position,
            yaw: self.body.yaw,
            mode: self.locomotion.mode(),
            ground,
            camera: self.camera.pose(),
        }
    }

    fn probe_ground(&self, world: &dyn CollisionProvider) -> GroundState {
        self.probe.query_ground(
            world,
            self.body.position,
            self.body.forward(),
            self.body.right(),
            self.body.radius,
        )
    }

    /// Eye ray from the last camera pose, in world space.
    fn view_ray(&self) -> ViewRay {
        let pose = self.camera.pose();
        let yaw = self.body.yaw_rotation();
        ViewRay {
            origin: self.body.position + yaw * pose.local_position,
            direction: yaw * pose.forward(),
        }
    }
}
