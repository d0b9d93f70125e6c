//! Headless прогон сцены
//!
//! `pursuit_simulation [config.json]`: игрок берёт objective, enemy
//! начинает погоню, игрок добегает до выхода.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use pursuit_simulation::scene::{spawn_end_trigger, spawn_enemy, spawn_objective, spawn_player};
use pursuit_simulation::{
    create_headless_app_with, log_error, Enemy, HudState, InteractRequest, SessionFlags,
    SimulationConfig,
};

fn load_config() -> Result<SimulationConfig, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimulationConfig::default());
    };

    let json = std::fs::read_to_string(&path).map_err(|err| format!("{}: {}", path, err))?;
    SimulationConfig::from_json_str(&json).map_err(|err| format!("{}: {}", path, err))
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("Config: {}", err));
            std::process::exit(1);
        }
    };

    println!(
        "Starting pursuit headless simulation (seed: {}, {} Hz)",
        config.seed, config.tick_hz
    );

    let tick = Duration::from_secs_f64(1.0 / config.tick_hz);
    let mut app = create_headless_app_with(config);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(tick));

    let world = app.world_mut();
    let player = spawn_player(world, Vec3::new(0.0, 0.0, -8.0));
    let objective = spawn_objective(world, Vec3::new(0.0, 0.0, -7.0));
    let exit = Vec3::new(0.0, 0.0, -12.0);
    spawn_end_trigger(world, exit, 1.5);
    if let Err(err) = spawn_enemy(world, Vec3::new(6.0, 0.0, 6.0)) {
        log_error(&format!("Scene: failed to spawn enemy: {}", err));
        std::process::exit(1);
    }

    for frame in 0..600 {
        match frame {
            60 => {
                app.world_mut().send_event(InteractRequest { target: objective });
            }
            120 => {
                if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
                    transform.translation = exit;
                }
            }
            _ => {}
        }

        app.update();

        if frame % 60 == 0 {
            let mut enemies = app.world_mut().query::<&Enemy>();
            for enemy in enemies.iter(app.world()) {
                println!(
                    "Frame {}: enemy {:?} at {:.2} (player distance {:?})",
                    frame,
                    enemy.state(),
                    enemy.position(),
                    enemy.distance_to_player()
                );
            }
        }
    }

    let hud = app.world().resource::<HudState>();
    let flags = app.world().resource::<SessionFlags>();
    println!(
        "Simulation complete! prompt: {:?}, player can move: {}",
        hud.end_prompt, flags.player_can_move
    );
}
