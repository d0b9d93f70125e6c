//! Interaction capability + objective / end trigger
//!
//! Детекция цели (raycast): внешний коллаборатор, сюда приходит уже `InteractRequest`.

pub mod end_trigger;
pub mod objective;
pub mod systems;


pub use end_trigger::EndTrigger;
pub use objective::ObjectiveItem;
pub use systems::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Что-то, что игрок может активировать
pub trait Interactable {
    fn activate(&mut self);
}

/// Interaction Plugin
///
/// Порядок выполнения:
/// 1. dispatch_interactions: InteractRequest → Interactable::activate
/// 2. publish_objective_activation: objective → ObjectiveActivated (через latch)
/// 3. arm_end_triggers: выход открывается после objective
/// 4. check_end_triggers: игрок в зоне выхода → VictoryAchieved
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                dispatch_interactions,
                publish_objective_activation,
                arm_end_triggers,
                check_end_triggers,
            )
                .chain()
                .in_set(SimulationSet::Interaction),
        );
    }
}
