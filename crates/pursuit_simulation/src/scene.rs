//! Сборка сцены: spawn игрока, enemy, objective, exit зоны
//!
//! Параметры берутся из `SimulationConfig` в мире (или default).

use bevy::prelude::*;

use crate::ai::Enemy;
use crate::config::SimulationConfig;
use crate::fsm::FsmError;
use crate::interaction::{EndTrigger, ObjectiveItem};
use crate::player::player_bundle;
use crate::DeterministicRng;

fn config(world: &World) -> SimulationConfig {
    world
        .get_resource::<SimulationConfig>()
        .cloned()
        .unwrap_or_default()
}

pub fn spawn_player(world: &mut World, position: Vec3) -> Entity {
    let config = config(world);
    world.spawn(player_bundle(&config.player, position)).id()
}

/// Enemy с headless агентом. Seed: следующий из `DeterministicRng`.
pub fn spawn_enemy(world: &mut World, position: Vec3) -> Result<Entity, FsmError> {
    let config = config(world);
    let seed = world
        .get_resource_mut::<DeterministicRng>()
        .map(|mut rng| rng.next_seed())
        .unwrap_or(config.seed);

    let mut enemy = Enemy::headless(&config.enemy, seed)?;
    enemy.set_position(position);

    crate::log(&format!("Scene: enemy spawned at {} (seed {})", position, seed));
    Ok(world.spawn((Transform::from_translation(position), enemy)).id())
}

pub fn spawn_objective(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((Transform::from_translation(position), ObjectiveItem::default()))
        .id()
}

pub fn spawn_end_trigger(world: &mut World, position: Vec3, radius: f32) -> Entity {
    world
        .spawn((Transform::from_translation(position), EndTrigger::new(radius)))
        .id()
}
