//! Locomotion State Machine
//!
//! Owns the single [`LocomotionMode`] and decides, once per tick, which
//! [`Maneuver`] produces the body's motion.
//!
//! # Tick phases
//!
//! 1. [`step`](Locomotion::step), with the pre-motion ground: entry checks in
//!    priority order, then the active maneuver's `update`.
//! 2. The controller applies the returned [`Motion`].
//! 3. [`settle`](Locomotion::settle), with the post-motion ground: exit checks,
//!    grounded/airborne classification and the wall-kick reset.
//!
//! # Entry priority
//!
//! | situation                        | tried in order                       |
//! |----------------------------------|--------------------------------------|
//! | climbing                         | nothing (climb is exclusive)         |
//! | airborne                         | end slide, ledge climb, wall-kick    |
//! | grounded, jump pressed           | cancel slide, ground jump            |
//! | grounded, crouch + sprint        | slide                                |

use std::fmt;

use super::crouch::CrouchController;
use super::ledge_climb::LedgeClimb;
use super::maneuver::{Maneuver, Motion, MotionContext};
use super::movement::MovementIntegrator;
use super::slide::Slide;
use super::wall_kick::WallKick;
use crate::config::LocomotionConfig;
use crate::probe::GroundState;

/// Which subsystem owns the body's motion this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionMode {
    #[default]
    Grounded,
    Sliding,
    Airborne,
    WallKicking,
    Climbing,
}

impl LocomotionMode {
    /// Plain walking/falling mode for a ground snapshot.
    pub fn from_ground(ground: &GroundState) -> Self {
        if ground.grounded {
            LocomotionMode::Grounded
        } else {
            LocomotionMode::Airborne
        }
    }
}

impl fmt::Display for LocomotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocomotionMode::Grounded => "grounded",
            LocomotionMode::Sliding => "sliding",
            LocomotionMode::Airborne => "airborne",
            LocomotionMode::WallKicking => "wall-kicking",
            LocomotionMode::Climbing => "climbing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Locomotion {
    mode: LocomotionMode,
    movement: MovementIntegrator,
    wall_kick: WallKick,
    ledge: LedgeClimb,
    slide: Slide,
}

impl Locomotion {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            mode: LocomotionMode::Grounded,
            movement: MovementIntegrator::new(config),
            wall_kick: WallKick::new(config),
            ledge: LedgeClimb::new(config),
            slide: Slide::new(config),
        }
    }

    pub fn mode(&self) -> LocomotionMode {
        self.mode
    }

    pub fn is_climbing(&self) -> bool {
        self.mode == LocomotionMode::Climbing
    }

    pub fn wall_kick(&self) -> &WallKick {
        &self.wall_kick
    }

    pub fn ledge_climb(&self) -> &LedgeClimb {
        &self.ledge
    }

    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    /// Drop an in-progress slide after the body was moved from outside the
    /// tick. A climb is left alone.
    pub fn interrupt(&mut self, crouch: &mut CrouchController) {
        if self.mode == LocomotionMode::Sliding {
            self.slide.cancel(crouch);
            self.set_mode(LocomotionMode::Airborne);
        }
    }

    fn set_mode(&mut self, mode: LocomotionMode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "locomotion mode");
            self.mode = mode;
        }
    }

    /// Arbitrate and produce this tick's motion. `ctx.ground` is the
    /// pre-motion probe.
    pub fn step(&mut self, ctx: &mut MotionContext<'_>) -> Motion {
        self.ledge.track_hold(ctx.input.jump_held, ctx.dt);

        if self.mode == LocomotionMode::Climbing {
            return self.ledge.update(ctx);
        }

        if ctx.ground.grounded {
            if ctx.input.jump_pressed {
                if self.mode == LocomotionMode::Sliding {
                    self.slide.cancel(ctx.crouch);
                    self.set_mode(LocomotionMode::Grounded);
                }
                if self.movement.jump(ctx.body, &ctx.ground) {
                    self.wall_kick.reset();
                }
            } else if self.mode != LocomotionMode::Sliding && self.slide.try_enter(ctx) {
                self.set_mode(LocomotionMode::Sliding);
            }
        } else {
            if self.mode == LocomotionMode::Sliding {
                self.slide.cancel(ctx.crouch);
                self.set_mode(LocomotionMode::Airborne);
            }
            if self.ledge.try_enter(ctx) {
                self.set_mode(LocomotionMode::Climbing);
                return self.ledge.update(ctx);
            }
            if self.wall_kick.try_enter(ctx) {
                self.set_mode(LocomotionMode::WallKicking);
            }
        }

        match self.mode {
            LocomotionMode::Sliding => self.slide.update(ctx),
            LocomotionMode::WallKicking => self.wall_kick.update(ctx),
            _ => self.movement.update(ctx),
        }
    }

    /// Resolve exits against the post-motion probe in `ctx.ground`.
    pub fn settle(&mut self, ctx: &mut MotionContext<'_>) {
        let finished = match self.mode {
            LocomotionMode::Climbing => self.ledge.try_exit(ctx),
            LocomotionMode::Sliding => self.slide.try_exit(ctx),
            LocomotionMode::WallKicking => self.wall_kick.try_exit(ctx),
            LocomotionMode::Grounded | LocomotionMode::Airborne => true,
        };
        if finished {
            self.set_mode(LocomotionMode::from_ground(&ctx.ground));
        }

        if ctx.ground.grounded && self.mode != LocomotionMode::Climbing {
            self.wall_kick.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::input::FrameInput;
    use crate::physics::StaticWorld;
    use crate::player::Body;
    use crate::player::maneuver::ViewRay;
    use crate::probe::SurfaceProbe;

    const DT: f32 = 1.0 / 60.0;

    struct Rig {
        body: Body,
        crouch: CrouchController,
        world: StaticWorld,
        probe: SurfaceProbe,
    }

    impl Rig {
        /// Ground plane plus a tall wall 0.8m to the right of the origin.
        fn beside_wall(config: &LocomotionConfig) -> Self {
            let mut world = StaticWorld::with_ground(0.0);
            world.add_box(Vec3::new(0.8, 0.0, -5.0), Vec3::new(1.8, 6.0, 5.0));
            Self {
                body: Body::from_tuning(Vec3::ZERO, &config.body),
                crouch: CrouchController::new(config),
                world,
                probe: SurfaceProbe::new(config),
            }
        }

        fn step(&mut self, locomotion: &mut Locomotion, ground: GroundState, input: FrameInput) -> Motion {
            let view = ViewRay {
                origin: self.body.position + Vec3::Y * 1.6,
                direction: Vec3::NEG_Z,
            };
            let mut ctx = MotionContext {
                body: &mut self.body,
                crouch: &mut self.crouch,
                world: &self.world,
                probe: &self.probe,
                ground,
                input: &input,
                move_dir: Vec3::NEG_Z,
                speed: 10.0,
                view,
                dt: DT,
            };
            locomotion.step(&mut ctx)
        }
    }

    fn slide_input() -> FrameInput {
        FrameInput {
            move_axis: Vec2::Y,
            sprint_held: true,
            crouch_pressed: true,
            crouch_held: true,
            ..Default::default()
        }
    }

    fn sliding_rig(config: &LocomotionConfig) -> (Locomotion, Rig) {
        let mut locomotion = Locomotion::new(config);
        let mut rig = Rig::beside_wall(config);
        rig.step(&mut locomotion, GroundState::on_surface(Vec3::Y), slide_input());
        assert_eq!(locomotion.mode(), LocomotionMode::Sliding);
        assert!(rig.crouch.is_forced());
        (locomotion, rig)
    }

    #[test]
    fn test_losing_ground_ends_slide() {
        let config = LocomotionConfig::default();
        let (mut locomotion, mut rig) = sliding_rig(&config);

        rig.body.position.y = 1.0;
        let input = FrameInput {
            move_axis: Vec2::Y,
            sprint_held: true,
            crouch_held: true,
            ..Default::default()
        };
        rig.step(&mut locomotion, GroundState::AIRBORNE, input);

        assert_eq!(locomotion.mode(), LocomotionMode::Airborne);
        assert!(!locomotion.slide().is_sliding());
        assert!(!rig.crouch.is_forced());
    }

    #[test]
    fn test_wall_kick_out_of_slide_releases_crouch() {
        let config = LocomotionConfig::default();
        let (mut locomotion, mut rig) = sliding_rig(&config);

        rig.body.position.y = 1.0;
        let input = FrameInput {
            jump_pressed: true,
            jump_held: true,
            sprint_held: true,
            ..Default::default()
        };
        rig.step(&mut locomotion, GroundState::AIRBORNE, input);

        assert_eq!(locomotion.mode(), LocomotionMode::WallKicking);
        assert!(!locomotion.slide().is_sliding());
        assert!(!rig.crouch.is_forced());
        let expected = config.wall_kick.kick_force + config.movement.gravity * DT;
        assert!((rig.body.vertical_velocity - expected).abs() < 1e-3);
    }

    #[test]
    fn test_interrupt_cancels_slide_only() {
        let config = LocomotionConfig::default();
        let (mut locomotion, mut rig) = sliding_rig(&config);

        locomotion.interrupt(&mut rig.crouch);
        assert_eq!(locomotion.mode(), LocomotionMode::Airborne);
        assert!(!locomotion.slide().is_sliding());
        assert!(!rig.crouch.is_forced());

        let mut idle = Locomotion::new(&config);
        idle.interrupt(&mut rig.crouch);
        assert_eq!(idle.mode(), LocomotionMode::Grounded);
    }

    #[test]
    fn test_mode_from_ground() {
        assert_eq!(
            LocomotionMode::from_ground(&GroundState::AIRBORNE),
            LocomotionMode::Airborne
        );
        assert_eq!(
            LocomotionMode::from_ground(&GroundState::on_surface(Vec3::Y)),
            LocomotionMode::Grounded
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(LocomotionMode::WallKicking.to_string(), "wall-kicking");
        assert_eq!(LocomotionMode::default().to_string(), "grounded");
    }
}
