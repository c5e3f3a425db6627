//! Locomotion Tests - Controller Scenarios
//!
//! Drives the full first-person controller against a `StaticWorld` and checks
//! walking, jumping, wall-kicks, slides, ledge climbs and crouching end to end.

use fps_locomotion::config::LocomotionConfig;
use fps_locomotion::input::ActionEvent;
use fps_locomotion::physics::StaticWorld;
use fps_locomotion::player::{FirstPersonController, LocomotionMode};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn controller_at(spawn: Vec3) -> FirstPersonController {
    FirstPersonController::new(&LocomotionConfig::default(), spawn)
}

fn run(controller: &mut FirstPersonController, world: &StaticWorld, ticks: u32) {
    for _ in 0..ticks {
        controller.tick(world, DT);
    }
}

fn tap_jump(controller: &mut FirstPersonController) {
    let input = controller.input_mut();
    input.push(ActionEvent::JumpStarted);
    input.push(ActionEvent::JumpCanceled);
}

// ============================================================================
// Walk / Jump
// ============================================================================

#[test]
fn test_walk_forward_one_tenth_second() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    c.input_mut().set_move_axis(Vec2::new(0.0, 1.0));

    let out = c.tick(&world, 0.1);

    assert!(approx_eq(out.position.z, -0.5, 1e-3), "got {:?}", out.position);
    assert!(approx_eq(out.position.x, 0.0, 1e-4));
    assert!(approx_eq(out.position.y, 0.0, 1e-4));
    assert!(out.ground.grounded);
}

#[test]
fn test_sprint_is_faster_than_walk() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    c.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
    c.input_mut().push(ActionEvent::SprintStarted);

    let out = c.tick(&world, 0.1);
    assert!(approx_eq(out.position.z, -1.0, 1e-3));
}

#[test]
fn test_strafe_moves_right() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    c.input_mut().set_move_axis(Vec2::new(1.0, 0.0));

    let out = c.tick(&world, 0.1);
    assert!(approx_eq(out.position.x, 0.5, 1e-3));
}

#[test]
fn test_jump_velocity_from_height_and_gravity() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    run(&mut c, &world, 5);

    tap_jump(&mut c);
    c.tick(&world, DT);

    // sqrt(2 * 2 * 40) = 12.649, minus one tick of gravity
    let expected = 160.0_f32.sqrt() - 40.0 * DT;
    assert!(approx_eq(c.body().vertical_velocity, expected, 1e-3));
}

#[test]
fn test_jump_lands_back_on_ground() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    run(&mut c, &world, 5);

    tap_jump(&mut c);
    let mut apex = 0.0_f32;
    let mut left_ground = false;
    for _ in 0..120 {
        let out = c.tick(&world, DT);
        apex = apex.max(out.position.y);
        left_ground |= out.mode == LocomotionMode::Airborne;
    }

    assert!(left_ground);
    assert!(approx_eq(apex, 2.0, 0.25), "apex {apex}");
    assert_eq!(c.mode(), LocomotionMode::Grounded);
    assert!(c.body().position.y.abs() < 1e-3);
}

#[test]
fn test_air_momentum_carries_without_input() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::new(0.0, 10.0, 0.0));
    c.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
    run(&mut c, &world, 10);

    c.input_mut().set_move_axis(Vec2::ZERO);
    let before = c.body().position.z;
    run(&mut c, &world, 5);
    assert!(c.body().position.z < before, "momentum should keep carrying forward");
}

// ============================================================================
// Wall-Kick
// ============================================================================

/// Ground plus a tall wall 0.3m right of a body at the origin.
fn wall_world() -> StaticWorld {
    let mut world = StaticWorld::with_ground(0.0);
    world.add_box(Vec3::new(0.8, 0.0, -5.0), Vec3::new(1.8, 6.0, 5.0));
    world
}

fn jump_next_to_wall(c: &mut FirstPersonController, world: &StaticWorld) {
    run(c, world, 5);
    tap_jump(c);
    run(c, world, 5);
    assert_eq!(c.mode(), LocomotionMode::Airborne);
}

#[test]
fn test_wall_kick_from_airborne_jump() {
    let world = wall_world();
    let mut c = controller_at(Vec3::ZERO);
    jump_next_to_wall(&mut c, &world);

    tap_jump(&mut c);
    let out = c.tick(&world, DT);

    assert_eq!(out.mode, LocomotionMode::WallKicking);
    let tracker = c.locomotion().wall_kick().tracker();
    assert_eq!(tracker.kick_count(), 1);
    assert_eq!(tracker.last_wall_normal(), Some(Vec3::NEG_X));
    assert!(approx_eq(c.body().vertical_velocity, 9.0 - 40.0 * DT, 1e-3));
    // Pushed away from the wall
    assert!(c.body().air_momentum.x < 0.0);
}

#[test]
fn test_second_kick_rejected_when_budget_spent() {
    let world = wall_world();
    let mut c = controller_at(Vec3::ZERO);
    jump_next_to_wall(&mut c, &world);

    tap_jump(&mut c);
    c.tick(&world, DT);
    let velocity = c.body().vertical_velocity;

    tap_jump(&mut c);
    c.tick(&world, DT);

    assert_eq!(c.locomotion().wall_kick().tracker().kick_count(), 1);
    // No impulse: only gravity acted
    assert!(approx_eq(c.body().vertical_velocity, velocity - 40.0 * DT, 1e-3));
}

#[test]
fn test_same_wall_rejected_even_with_budget_left() {
    let world = wall_world();
    let mut config = LocomotionConfig::default();
    config.wall_kick.max_wall_kicks = 3;
    let mut c = FirstPersonController::new(&config, Vec3::ZERO);
    jump_next_to_wall(&mut c, &world);

    tap_jump(&mut c);
    c.tick(&world, DT);
    let velocity = c.body().vertical_velocity;

    tap_jump(&mut c);
    c.tick(&world, DT);

    assert_eq!(c.locomotion().wall_kick().tracker().kick_count(), 1);
    assert!(c.body().vertical_velocity < velocity);
}

#[test]
fn test_kick_count_resets_on_landing() {
    let world = wall_world();
    let mut c = controller_at(Vec3::ZERO);
    jump_next_to_wall(&mut c, &world);

    tap_jump(&mut c);
    c.tick(&world, DT);
    assert_eq!(c.locomotion().wall_kick().tracker().kick_count(), 1);

    run(&mut c, &world, 180);
    assert_eq!(c.mode(), LocomotionMode::Grounded);
    let tracker = c.locomotion().wall_kick().tracker();
    assert_eq!(tracker.kick_count(), 0);
    assert_eq!(tracker.last_wall_normal(), None);
}

#[test]
fn test_second_kick_adds_force_increment() {
    let mut world = StaticWorld::with_ground(0.0);
    world
        .add_box(Vec3::new(-1.8, 0.0, -5.0), Vec3::new(-0.8, 6.0, 5.0))
        .add_box(Vec3::new(0.8, 0.0, -5.0), Vec3::new(1.8, 6.0, 5.0));
    let mut config = LocomotionConfig::default();
    config.wall_kick.max_wall_kicks = 2;
    config.wall_kick.kick_force_increment = 3.0;
    let mut c = FirstPersonController::new(&config, Vec3::ZERO);
    jump_next_to_wall(&mut c, &world);

    // Left wall is probed first
    tap_jump(&mut c);
    c.tick(&world, DT);
    let tracker = c.locomotion().wall_kick().tracker();
    assert_eq!(tracker.kick_count(), 1);
    assert_eq!(tracker.last_wall_normal(), Some(Vec3::X));
    assert!(approx_eq(c.body().vertical_velocity, 9.0 - 40.0 * DT, 1e-3));

    // Left wall is now a repeat, so the right wall takes the second kick
    tap_jump(&mut c);
    let out = c.tick(&world, DT);
    assert_eq!(out.mode, LocomotionMode::WallKicking);
    let tracker = c.locomotion().wall_kick().tracker();
    assert_eq!(tracker.kick_count(), 2);
    assert_eq!(tracker.last_wall_normal(), Some(Vec3::NEG_X));
    assert!(approx_eq(c.body().vertical_velocity, 12.0 - 40.0 * DT, 1e-3));
}

#[test]
fn test_no_kick_without_wall() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    jump_next_to_wall(&mut c, &world);

    tap_jump(&mut c);
    let out = c.tick(&world, DT);
    assert_eq!(out.mode, LocomotionMode::Airborne);
    assert_eq!(c.locomotion().wall_kick().tracker().kick_count(), 0);
}

// ============================================================================
// Slide
// ============================================================================

fn start_slide(c: &mut FirstPersonController, world: &StaticWorld) {
    let input = c.input_mut();
    input.set_move_axis(Vec2::new(0.0, 1.0));
    input.push(ActionEvent::SprintStarted);
    run(c, world, 5);

    c.input_mut().push(ActionEvent::CrouchStarted);
    let out = c.tick(world, DT);
    assert_eq!(out.mode, LocomotionMode::Sliding);
    c.input_mut().push(ActionEvent::CrouchCanceled);
}

#[test]
fn test_slide_ends_within_duration() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    start_slide(&mut c, &world);

    let mut ticks = 1;
    while c.mode() == LocomotionMode::Sliding {
        c.tick(&world, DT);
        ticks += 1;
        assert!(ticks < 200, "slide never ended");
    }

    let max_ticks = (1.2 / DT).ceil() as u32 + 1;
    assert!(ticks <= max_ticks, "slide lasted {ticks} ticks");
    assert_eq!(c.mode(), LocomotionMode::Grounded);
    assert!(!c.locomotion().slide().is_sliding());
}

#[test]
fn test_slide_direction_locked_at_entry() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    start_slide(&mut c, &world);

    let x_before = c.body().position.x;
    c.input_mut().accumulate_look(Vec2::new(90.0, 0.0));
    run(&mut c, &world, 10);

    assert_eq!(c.mode(), LocomotionMode::Sliding);
    assert!(approx_eq(c.body().position.x, x_before, 1e-3));
}

#[test]
fn test_slide_ends_on_ground_loss_same_tick() {
    // Platform ending at z = -3
    let mut world = StaticWorld::new();
    world.add_box(Vec3::new(-5.0, -1.0, -3.0), Vec3::new(5.0, 0.0, 5.0));
    let mut c = controller_at(Vec3::ZERO);
    start_slide(&mut c, &world);

    for _ in 0..60 {
        let out = c.tick(&world, DT);
        if !out.ground.grounded {
            assert_eq!(out.mode, LocomotionMode::Airborne);
            assert!(!c.locomotion().slide().is_sliding());
            return;
        }
        assert_eq!(out.mode, LocomotionMode::Sliding);
    }
    panic!("never left the platform");
}

#[test]
fn test_teleport_mid_slide_ends_slide() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    start_slide(&mut c, &world);

    c.teleport(Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(c.mode(), LocomotionMode::Airborne);
    assert!(!c.locomotion().slide().is_sliding());
    assert!(!c.crouch().is_forced());

    run(&mut c, &world, 300);
    assert!(!c.crouch().is_crouching());
    assert!(approx_eq(c.body().height, 2.0, 1e-2));

    // Sprint and move are still held, so a fresh crouch slides again
    c.input_mut().push(ActionEvent::CrouchStarted);
    let out = c.tick(&world, DT);
    assert_eq!(out.mode, LocomotionMode::Sliding);
}

#[test]
fn test_slide_releases_crouch() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    start_slide(&mut c, &world);

    run(&mut c, &world, 200);
    assert!(!c.crouch().is_crouching());
    assert!(approx_eq(c.body().height, 2.0, 1e-2));
}

#[test]
fn test_jump_cancels_slide() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    start_slide(&mut c, &world);
    run(&mut c, &world, 5);

    tap_jump(&mut c);
    c.tick(&world, DT);
    assert!(!c.locomotion().slide().is_sliding());
    assert!(c.body().vertical_velocity > 0.0);
}

// ============================================================================
// Ledge Climb
// ============================================================================

/// Ground plus a block whose face is at z = -1 and top at 2.2m.
fn ledge_world() -> StaticWorld {
    let mut world = StaticWorld::with_ground(0.0);
    world.add_box(Vec3::new(-5.0, 0.0, -4.0), Vec3::new(5.0, 2.2, -1.0));
    world
}

#[test]
fn test_ledge_climb_reaches_target_exactly() {
    let world = ledge_world();
    // Airborne, facing the wall, eye just below the ledge top
    let mut c = controller_at(Vec3::new(0.0, 0.5, -0.3));
    c.input_mut().push(ActionEvent::JumpStarted);

    let out = c.tick(&world, DT);
    assert_eq!(out.mode, LocomotionMode::Climbing);
    assert!(!c.body().collision_enabled);
    assert!(!c.body().gravity_enabled);

    let end = c
        .locomotion()
        .ledge_climb()
        .session()
        .map(|s| s.end)
        .expect("climb session");
    assert!((end - Vec3::new(0.0, 2.2, -1.55)).length() < 1e-3);

    let mut ticks = 1;
    while c.mode() == LocomotionMode::Climbing {
        c.tick(&world, DT);
        ticks += 1;
        assert!(ticks < 60, "climb never finished");
    }

    assert_eq!(c.body().position, end);
    assert!(c.body().collision_enabled);
    assert!(c.body().gravity_enabled);
    assert_eq!(c.mode(), LocomotionMode::Grounded);
}

#[test]
fn test_climb_ignores_look_input() {
    let world = ledge_world();
    let mut c = controller_at(Vec3::new(0.0, 0.5, -0.3));
    c.input_mut().push(ActionEvent::JumpStarted);
    c.tick(&world, DT);
    assert_eq!(c.mode(), LocomotionMode::Climbing);

    let yaw = c.body().yaw;
    let pitch = c.camera().pitch_deg();
    c.input_mut().accumulate_look(Vec2::new(45.0, 30.0));
    c.tick(&world, DT);

    assert_eq!(c.body().yaw, yaw);
    assert_eq!(c.camera().pitch_deg(), pitch);
}

#[test]
fn test_held_jump_climbs_ledge() {
    let world = ledge_world();
    // Falling from above the block: the ledge comes into view on the way down
    let mut c = controller_at(Vec3::new(0.0, 1.5, -0.3));
    c.input_mut().push(ActionEvent::JumpStarted);
    let out = c.tick(&world, DT);
    assert_eq!(out.mode, LocomotionMode::Airborne);

    for _ in 0..60 {
        if c.tick(&world, DT).mode == LocomotionMode::Climbing {
            return;
        }
    }
    panic!("held jump never started a climb");
}

#[test]
fn test_released_jump_does_not_climb() {
    let world = ledge_world();
    let mut c = controller_at(Vec3::new(0.0, 1.5, -0.3));
    tap_jump(&mut c);

    for _ in 0..60 {
        assert_ne!(c.tick(&world, DT).mode, LocomotionMode::Climbing);
    }
    assert_eq!(c.mode(), LocomotionMode::Grounded);
}

#[test]
fn test_ledge_climb_wins_over_wall_kick() {
    let mut world = ledge_world();
    // Side wall within kick range, clear of the ledge block
    world.add_box(Vec3::new(0.8, 0.0, -0.9), Vec3::new(1.8, 6.0, 3.0));
    let mut c = controller_at(Vec3::new(0.0, 0.5, -0.3));
    c.input_mut().push(ActionEvent::JumpStarted);

    let out = c.tick(&world, DT);
    assert_eq!(out.mode, LocomotionMode::Climbing);
    assert_eq!(c.locomotion().wall_kick().tracker().kick_count(), 0);
}

#[test]
fn test_no_climb_from_ground() {
    let world = ledge_world();
    let mut c = controller_at(Vec3::new(0.0, 0.0, -0.3));
    run(&mut c, &world, 5);

    c.input_mut().push(ActionEvent::JumpStarted);
    let out = c.tick(&world, DT);
    assert_ne!(out.mode, LocomotionMode::Climbing);
}

// ============================================================================
// Crouch
// ============================================================================

#[test]
fn test_stand_up_deferred_under_ceiling() {
    let mut world = StaticWorld::with_ground(0.0);
    // Low ceiling between z = -10 and z = -4
    world.add_box(Vec3::new(-5.0, 1.5, -10.0), Vec3::new(5.0, 3.0, -4.0));
    let mut c = controller_at(Vec3::ZERO);

    c.input_mut().push(ActionEvent::CrouchStarted);
    run(&mut c, &world, 60);
    assert!(c.crouch().is_crouching());

    // Crouch-walk under the ceiling
    c.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
    run(&mut c, &world, 210);
    c.input_mut().set_move_axis(Vec2::ZERO);
    let z = c.body().position.z;
    assert!(z < -5.0 && z > -9.0, "z = {z}");

    c.input_mut().push(ActionEvent::CrouchCanceled);
    run(&mut c, &world, 60);
    assert!(c.crouch().is_crouching());
    assert!(approx_eq(c.body().height, 1.0, 0.1));

    // Out the other side: stands on its own
    c.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
    run(&mut c, &world, 150);
    c.input_mut().set_move_axis(Vec2::ZERO);
    run(&mut c, &world, 60);
    assert!(c.body().position.z < -10.5);
    assert!(!c.crouch().is_crouching());
    assert!(approx_eq(c.body().height, 2.0, 1e-2));
}

#[test]
fn test_crouch_uses_crouch_speed() {
    let world = StaticWorld::with_ground(0.0);
    let mut c = controller_at(Vec3::ZERO);
    c.input_mut().push(ActionEvent::CrouchStarted);
    run(&mut c, &world, 60);

    c.input_mut().set_move_axis(Vec2::new(0.0, 1.0));
    let before = c.body().position.z;
    c.tick(&world, 0.1);
    assert!(approx_eq(c.body().position.z - before, -0.2, 1e-3));
}
