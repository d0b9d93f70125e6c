//! Event bus: глобальные gameplay сигналы
//!
//! Publish = `EventWriter::write`, subscribe = система с `EventReader`.
//! Подписчики вызываются в порядке регистрации (SimulationSet chain).

pub mod events;

pub use events::*;

use bevy::prelude::*;

/// Регистрирует все события + objective latch
pub struct SignalsPlugin;

impl Plugin for SignalsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ObjectiveActivated>()
            .add_event::<VictoryAchieved>()
            .add_event::<InteractRequest>()
            .add_event::<EndPromptRequested>()
            .init_resource::<ObjectiveLatch>();
    }
}
