//! Interaction systems

use bevy::prelude::*;

use crate::ai::Enemy;
use crate::player::Player;
use crate::signals::{
    EndPromptRequested, InteractRequest, ObjectiveActivated, ObjectiveLatch, VictoryAchieved,
};

use super::{EndTrigger, Interactable, ObjectiveItem};

/// Система: InteractRequest → Interactable::activate у цели
pub fn dispatch_interactions(
    mut requests: EventReader<InteractRequest>,
    mut enemies: Query<&mut Enemy>,
    mut objectives: Query<&mut ObjectiveItem>,
) {
    for request in requests.read() {
        if let Ok(mut enemy) = enemies.get_mut(request.target) {
            enemy.activate();
        } else if let Ok(mut item) = objectives.get_mut(request.target) {
            item.activate();
        } else {
            crate::log(&format!("Interact: {:?} is not interactable", request.target));
        }
    }
}

/// Система: активированные objective → ObjectiveActivated (один раз за сессию)
pub fn publish_objective_activation(
    mut items: Query<&mut ObjectiveItem>,
    mut latch: ResMut<ObjectiveLatch>,
    mut signals: EventWriter<ObjectiveActivated>,
) {
    for mut item in items.iter_mut() {
        // Проверка через Deref: не дёргаем change detection зря
        if !item.is_pending() {
            continue;
        }
        item.take_pending();

        if latch.try_trip() {
            crate::log_info("🎯 Objective activated");
            signals.write(ObjectiveActivated);
        } else {
            crate::log("Objective already activated this session");
        }
    }
}

/// Система: objective → взводим все exit зоны
pub fn arm_end_triggers(
    mut signals: EventReader<ObjectiveActivated>,
    mut triggers: Query<&mut EndTrigger>,
) {
    for _ in signals.read() {
        for mut trigger in triggers.iter_mut() {
            if !trigger.is_armed() {
                trigger.arm();
                crate::log("End trigger armed");
            }
        }
    }
}

/// Система: игрок внутри взведённой exit зоны → победа
pub fn check_end_triggers(
    mut triggers: Query<(&Transform, &mut EndTrigger)>,
    players: Query<&Transform, (With<Player>, Without<EndTrigger>)>,
    mut victory: EventWriter<VictoryAchieved>,
    mut prompts: EventWriter<EndPromptRequested>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };

    for (transform, mut trigger) in triggers.iter_mut() {
        if transform.translation.distance(player.translation) > trigger.radius {
            continue;
        }

        if trigger.try_fire() {
            crate::log_info("🏆 GAME WON");
            victory.write(VictoryAchieved);
            prompts.write(EndPromptRequested { victory: true });
        }
    }
}
