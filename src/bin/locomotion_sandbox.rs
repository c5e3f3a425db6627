//! Locomotion Sandbox - headless scripted run
//!
//! Run with: `cargo run --bin locomotion_sandbox [tuning.json]`
//!
//! Builds a small static course (floor, side wall, ledge block), drives the
//! first-person controller through a scripted input sequence and logs the
//! per-tick output. `RUST_LOG=fps_locomotion=debug` shows mode transitions,
//! `trace` shows rejected probes.
//!
//! Pass `--dump-config` to print the default tuning as JSON and exit.

use fps_locomotion::input::ActionEvent;
use fps_locomotion::{FirstPersonController, LocomotionConfig, StaticWorld};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

/// Log every Nth tick of a phase.
const LOG_EVERY: u32 = 10;

/// One scripted input phase.
struct Phase {
    name: &'static str,
    ticks: u32,
    move_axis: Vec2,
    /// Events pushed on the first tick of the phase
    events: &'static [ActionEvent],
}

const SCRIPT: &[Phase] = &[
    Phase {
        name: "settle",
        ticks: 10,
        move_axis: Vec2::ZERO,
        events: &[],
    },
    Phase {
        name: "walk",
        ticks: 60,
        move_axis: Vec2::new(0.0, 1.0),
        events: &[],
    },
    Phase {
        name: "sprint",
        ticks: 30,
        move_axis: Vec2::new(0.0, 1.0),
        events: &[ActionEvent::SprintStarted],
    },
    Phase {
        name: "slide",
        ticks: 70,
        move_axis: Vec2::new(0.0, 1.0),
        events: &[ActionEvent::CrouchStarted],
    },
    Phase {
        name: "stand",
        ticks: 30,
        move_axis: Vec2::ZERO,
        events: &[ActionEvent::CrouchCanceled, ActionEvent::SprintCanceled],
    },
    Phase {
        name: "jump",
        ticks: 20,
        move_axis: Vec2::new(1.0, 0.0),
        events: &[ActionEvent::JumpStarted, ActionEvent::JumpCanceled],
    },
    Phase {
        name: "wall-kick",
        ticks: 60,
        move_axis: Vec2::ZERO,
        events: &[ActionEvent::JumpStarted, ActionEvent::JumpCanceled],
    },
    Phase {
        name: "approach ledge",
        ticks: 90,
        move_axis: Vec2::new(0.0, 1.0),
        events: &[],
    },
    Phase {
        name: "climb",
        ticks: 60,
        move_axis: Vec2::new(0.0, 1.0),
        events: &[ActionEvent::JumpStarted],
    },
];

fn build_course() -> StaticWorld {
    let mut world = StaticWorld::with_ground(0.0);
    world
        // Side wall to kick off, just right of the start line
        .add_box(Vec3::new(1.2, 0.0, -20.0), Vec3::new(2.2, 6.0, 4.0))
        // Ledge block ahead, top at 2.2m
        .add_box(Vec3::new(-4.0, 0.0, -40.0), Vec3::new(4.0, 2.2, -28.0));
    world
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("fps_locomotion=info".parse()?))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--dump-config") {
        println!("{}", LocomotionConfig::default().to_json_pretty()?);
        return Ok(());
    }

    init_tracing()?;

    let config = match arg {
        Some(path) => LocomotionConfig::load(&path)?,
        None => LocomotionConfig::default(),
    };

    let world = build_course();
    let mut controller = FirstPersonController::new(&config, Vec3::ZERO);
    tracing::info!(phases = SCRIPT.len(), "starting scripted run");

    let mut tick = 0u32;
    for phase in SCRIPT {
        tracing::info!(phase = phase.name, "phase");
        let input = controller.input_mut();
        input.set_move_axis(phase.move_axis);
        for &event in phase.events {
            input.push(event);
        }

        for i in 0..phase.ticks {
            let out = controller.tick(&world, DT);
            tick += 1;
            if i % LOG_EVERY == 0 || i + 1 == phase.ticks {
                tracing::info!(
                    tick,
                    mode = %out.mode,
                    x = out.position.x,
                    y = out.position.y,
                    z = out.position.z,
                    grounded = out.ground.grounded,
                    eye_y = out.camera.local_position.y,
                    "tick"
                );
            }
        }
    }

    let body = controller.body();
    tracing::info!(
        position = ?body.position,
        mode = %controller.mode(),
        kicks = controller.locomotion().wall_kick().tracker().kick_count(),
        "scripted run finished"
    );
    Ok(())
}
