//! Глобальные флаги сессии (читают player motor и mouse look)

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFlags {
    pub player_can_move: bool,
    pub mouse_look_enabled: bool,
}

impl Default for SessionFlags {
    fn default() -> Self {
        Self {
            player_can_move: true,
            mouse_look_enabled: true,
        }
    }
}

impl SessionFlags {
    /// Конец сессии: игрок больше не двигается и не вращает камеру
    pub fn disable_player_control(&mut self) {
        self.player_can_move = false;
        self.mouse_look_enabled = false;
    }
}
