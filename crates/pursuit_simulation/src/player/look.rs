//! Mouse look: сглаженный yaw/pitch с ограничением pitch

use bevy::prelude::*;

use crate::player::{Player, PlayerConfig};
use crate::session::SessionFlags;

/// Сырой mouse delta за тик
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LookInput {
    pub delta: Vec2,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MouseLook {
    sensitivity: f32,
    drag: f32,
    pitch_limit: f32,
    smoothing: Vec2,
    /// x: yaw, y: pitch (градусы)
    result: Vec2,
}

impl MouseLook {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            sensitivity: config.look_sensitivity,
            drag: config.look_drag.max(1.0e-3),
            pitch_limit: config.pitch_limit.abs(),
            smoothing: Vec2::ZERO,
            result: Vec2::ZERO,
        }
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.result.x
    }

    /// Pitch камеры (камера: внешний коллаборатор)
    pub fn pitch_degrees(&self) -> f32 {
        self.result.y
    }

    pub fn apply(&mut self, delta: Vec2) {
        let direction = delta * self.sensitivity;
        self.smoothing = self.smoothing.lerp(direction, 1.0 / self.drag);
        self.result += self.smoothing;
        self.result.y = self.result.y.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Поворот тела вокруг вертикальной оси (мышь вправо → поворот вправо)
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.result.x.to_radians())
    }
}

/// Система: LookInput → MouseLook → rotation тела
pub fn drive_mouse_look(
    flags: Res<SessionFlags>,
    mut players: Query<(&mut Transform, &mut MouseLook, &mut LookInput), With<Player>>,
) {
    for (mut transform, mut look, mut input) in players.iter_mut() {
        let delta = std::mem::take(&mut input.delta);
        if !flags.mouse_look_enabled {
            continue;
        }

        look.apply(delta);
        transform.rotation = look.body_rotation();
    }
}
