//! AI systems (FixedUpdate, SimulationSet::Ai)

use bevy::prelude::*;

use crate::ai::{Enemy, SessionEffect};
use crate::player::Player;
use crate::services::{DebugShapes, GizmoBuffer};
use crate::session::SessionFlags;
use crate::signals::{EndPromptRequested, ObjectiveActivated, VictoryAchieved};

/// Система: ObjectiveActivated → force chase
pub fn react_to_objective(
    mut signals: EventReader<ObjectiveActivated>,
    mut enemies: Query<&mut Enemy>,
) {
    for _ in signals.read() {
        for mut enemy in enemies.iter_mut() {
            enemy.on_objective_activated();
        }
    }
}

/// Система: VictoryAchieved → GameOver(victory)
pub fn react_to_victory(
    mut signals: EventReader<VictoryAchieved>,
    mut enemies: Query<&mut Enemy>,
) {
    for _ in signals.read() {
        for mut enemy in enemies.iter_mut() {
            enemy.on_victory();
        }
    }
}

/// Система: Transform → сенсоры enemy
///
/// Нет игрока в мире → позиция игрока неизвестна (None).
pub fn sync_enemy_sensors(
    mut enemies: Query<(&Transform, &mut Enemy), Without<Player>>,
    players: Query<&Transform, With<Player>>,
) {
    let player = players.iter().next().map(|transform| transform.translation);

    for (transform, mut enemy) in enemies.iter_mut() {
        enemy.set_position(transform.translation);
        enemy.set_player_position(player);
    }
}

/// Система: один FSM tick для каждого enemy
pub fn tick_enemies(time: Res<Time>, mut enemies: Query<&mut Enemy>) {
    let delta = time.delta_secs();
    for mut enemy in enemies.iter_mut() {
        enemy.tick(delta);
    }
}

/// Система: навигационный агент двигает тело
pub fn drive_enemy_agents(time: Res<Time>, mut enemies: Query<(&mut Transform, &mut Enemy)>) {
    let delta = time.delta_secs();
    for (mut transform, mut enemy) in enemies.iter_mut() {
        let next = enemy.advance_agent(delta);
        if transform.translation != next {
            transform.translation = next;
        }
    }
}

/// Система: effects из GameOver → флаги сессии и prompt
pub fn apply_enemy_effects(
    mut enemies: Query<&mut Enemy>,
    mut flags: ResMut<SessionFlags>,
    mut prompts: EventWriter<EndPromptRequested>,
) {
    for mut enemy in enemies.iter_mut() {
        for effect in enemy.drain_effects() {
            match effect {
                SessionEffect::DisablePlayerControl => {
                    flags.disable_player_control();
                    crate::log("Session: player control disabled");
                }
                SessionEffect::ShowEndPrompt { victory } => {
                    prompts.write(EndPromptRequested { victory });
                }
            }
        }
    }
}

/// Система: собрать gizmos (только если debug draw включён)
pub fn collect_enemy_gizmos(enemies: Query<&Enemy>, mut debug: ResMut<DebugShapes>) {
    if !debug.enabled {
        return;
    }

    let mut buffer = GizmoBuffer::new();
    for enemy in enemies.iter() {
        enemy.draw_gizmos(&mut buffer);
    }
    debug.shapes = buffer.into_shapes();
}
