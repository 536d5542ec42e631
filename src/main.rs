//! Aerie - third-person locomotion and gliding sandbox
//!
//! Runs a headless session: one character on a floating platform driven by a
//! scripted key timeline (walk, jump, glide, orbit, cancel, fall, recover).

mod settings;

use anyhow::{Context, Result};
use glam::Vec3;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use aerie_core::{GameTime, Transform};
use aerie_game::{
    AnimatorParams, CharacterRegistry, CheckpointList, Collaborators, DashCooldown, InputBindings,
    LocomotionState, PauseMenu, PlayerController, SessionSlots,
};
use aerie_physics::{KinematicBody, PhysicsWorld};

use settings::GameSettings;

/// Scripted key presses: (time in seconds, key, pressed)
const SCRIPT: &[(f32, KeyCode, bool)] = &[
    (0.2, KeyCode::Space, true),
    (0.3, KeyCode::Space, false),
    (1.0, KeyCode::KeyW, true),
    (3.2, KeyCode::Space, true),
    (3.3, KeyCode::Space, false),
    (5.0, KeyCode::KeyE, true),
    (5.5, KeyCode::KeyE, false),
    (8.0, KeyCode::Space, true),
    (8.1, KeyCode::Space, false),
    (8.5, KeyCode::ShiftLeft, true),
    (8.6, KeyCode::ShiftLeft, false),
    (23.0, KeyCode::Escape, true),
    (23.1, KeyCode::Escape, false),
    (24.0, KeyCode::Escape, true),
    (24.1, KeyCode::Escape, false),
];

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting Aerie...");

    let settings = GameSettings::load();
    let demo = settings.demo.clone();

    let mut physics = PhysicsWorld::new();
    let half = demo.platform_half_extent;
    physics.create_static_box(Vec3::new(half, 0.5, half), Vec3::new(0.0, -0.5, 0.0));
    physics.update_queries();

    let spawn_point = Vec3::new(0.0, 0.1, 0.0);
    let mut body = KinematicBody::with_config(settings.body.clone());
    body.spawn(&mut physics, spawn_point);

    let mut registry = CharacterRegistry::new();
    let mut session = SessionSlots::new(1);
    let mut pause = PauseMenu::new();
    let mut checkpoints = CheckpointList::new(spawn_point + Vec3::Y);

    let collaborators = Collaborators::default()
        .with_animator(AnimatorParams::new())
        .with_dash(DashCooldown::default())
        .with_camera(settings.camera.clone())
        .with_bindings(InputBindings::default());

    let mut player = PlayerController::spawn(
        body,
        settings.locomotion.clone(),
        collaborators,
        &mut registry,
        &mut session,
    )
    .context("Failed to spawn player")?;

    let mut time = GameTime::new(settings.time.clone());
    let frame_delta = 1.0 / demo.frame_rate;
    let mut script = SCRIPT.iter().peekable();
    let mut last_state = player.state();

    while time.total_time < demo.duration as f64 {
        time.update(frame_delta);
        let now = time.total_time as f32;

        // Deliver scripted key events before the frame tick samples them
        while let Some(&&(at, key, pressed)) = script.peek() {
            if at > now {
                break;
            }
            script.next();
            if let Some(handler) = player.input_handler_mut() {
                let state = if pressed {
                    ElementState::Pressed
                } else {
                    ElementState::Released
                };
                handler.handle_keyboard(PhysicalKey::Code(key), state);
            }
        }

        player.update(&mut pause, time.delta_time);

        for _ in 0..time.fixed_steps() {
            player.fixed_update(&mut physics, &mut checkpoints, time.fixed_delta());
            physics.update_queries();
        }

        if player.state() != last_state {
            log_state(now, &player);
            last_state = player.state();
            // Every landing spot becomes the respawn point
            if last_state == LocomotionState::Grounded {
                checkpoints.activate(player.motor().position() + Vec3::Y);
            }
        }
    }

    let position = player.motor().position();
    info!(
        "Demo finished after {} frames / {} physics ticks, character at {:?}",
        time.frame_count, time.fixed_tick_count, position
    );

    let released = player.destroy(&mut registry, &mut session);
    let mut body = released.motor;
    body.despawn(&mut physics);
    if let Some(camera) = released.camera {
        info!("Follow camera persists at {:?}", camera.position());
    }
    info!("{} characters still registered", registry.len());

    Ok(())
}

fn log_state(now: f32, player: &PlayerController<KinematicBody>) {
    let glide = player
        .glide_visual()
        .map(|visual| visual.transform)
        .unwrap_or_else(Transform::default);
    match player.state() {
        LocomotionState::Gliding => info!(
            "[{:6.2}s] gliding, velocity {:?}, glide visual at {:?}",
            now,
            player.velocity(),
            glide.position
        ),
        state => info!(
            "[{:6.2}s] {}, position {:?}, velocity {:?}",
            now,
            state,
            player.motor().position(),
            player.velocity()
        ),
    }
}
