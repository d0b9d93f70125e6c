//! Player: marker, motor (gravity/jump/crouch), mouse look
//!
//! Ввод приходит извне (input коллаборатор пишет `PlayerInput` / `LookInput`),
//! здесь только правила движения. Оба контроллера читают `SessionFlags`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod look;
pub mod motor;


pub use look::*;
pub use motor::*;

use crate::SimulationSet;

/// Marker component для player-controlled entity
///
/// Enemy AI ищет игрока через `With<Player>`. В сцене ожидается один такой entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Параметры игрока
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct PlayerConfig {
    pub gravity: f32,
    pub speed: f32,
    /// Множитель скорости в присяде (0.1..=1.0)
    pub crouch_multiplier: f32,
    pub jump_force: f32,
    pub look_sensitivity: f32,
    /// Инерция mouse look (> 0, больше = плавнее)
    pub look_drag: f32,
    /// Ограничение pitch (градусы)
    pub pitch_limit: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gravity: 3.5,
            speed: 2.0,
            crouch_multiplier: 0.5,
            jump_force: 0.5,
            look_sensitivity: 2.5,
            look_drag: 1.5,
            pitch_limit: 80.0,
        }
    }
}

/// Полный набор компонентов игрока
pub fn player_bundle(config: &PlayerConfig, position: Vec3) -> impl Bundle {
    (
        Player,
        Transform::from_translation(position),
        PlayerMotor::from_config(config),
        PlayerInput::default(),
        MouseLook::from_config(config),
        LookInput::default(),
    )
}

/// Player Plugin
///
/// Порядок: motor → mouse look (оба в SimulationSet::Player, до AI).
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (drive_player_motor, drive_mouse_look)
                .chain()
                .in_set(SimulationSet::Player),
        );
    }
}
