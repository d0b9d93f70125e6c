//! Enemy AI module
//!
//! FSM-driven enemy: Idle → Wander → Chase → Stun / GameOver.
//! Логика в `Enemy` (host), ECS системы только синхронизируют сенсоры,
//! доставляют события и применяют side effects.

use bevy::prelude::*;

pub mod context;
pub mod enemy;
pub mod states;
pub mod systems;

#[cfg(test)]
mod test_support;

pub use context::*;
pub use enemy::Enemy;
pub use states::*;
pub use systems::*;

use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. react_to_objective / react_to_victory: глобальные сигналы
/// 2. sync_enemy_sensors: Transform enemy/игрока → контекст
/// 3. tick_enemies: FSM + perception override + stun cooldown
/// 4. drive_enemy_agents: шаг навигационного агента → Transform
/// 5. apply_enemy_effects: GameOver effects → SessionFlags / prompt
/// 6. collect_enemy_gizmos: debug shapes
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                react_to_objective,
                react_to_victory,
                sync_enemy_sensors,
                tick_enemies,
                drive_enemy_agents,
                apply_enemy_effects,
                collect_enemy_gizmos,
            )
                .chain()
                .in_set(SimulationSet::Ai),
        );
    }
}
