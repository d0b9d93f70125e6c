//! Player motor: гравитация, прыжок, присед, движение по осям
//!
//! Земля: плоскость y = GROUND_HEIGHT (без физики).

use bevy::prelude::*;

use crate::player::{Player, PlayerConfig};
use crate::session::SessionFlags;

pub const GROUND_HEIGHT: f32 = 0.0;

const STANDING_HEIGHT: f32 = 2.0;
const CROUCHING_HEIGHT: f32 = 1.0;

/// Ввод игрока на текущий тик
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Вперёд/назад (-1..1)
    pub forward: f32,
    /// Вправо/влево (-1..1)
    pub strafe: f32,
    /// Нажатие прыжка (сбрасывается после обработки)
    pub jump: bool,
    /// Кнопка приседа зажата
    pub crouch: bool,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerMotor {
    gravity: f32,
    speed: f32,
    crouch_multiplier: f32,
    jump_force: f32,
    current_speed: f32,
    /// Вертикальная скорость
    velocity: f32,
    crouching: bool,
    grounded: bool,
}

impl PlayerMotor {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            gravity: config.gravity,
            speed: config.speed,
            crouch_multiplier: config.crouch_multiplier.clamp(0.1, 1.0),
            jump_force: config.jump_force,
            current_speed: config.speed,
            velocity: 0.0,
            crouching: false,
            grounded: false,
        }
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Высота капсулы (присед уменьшает)
    pub fn height(&self) -> f32 {
        if self.crouching {
            CROUCHING_HEIGHT
        } else {
            STANDING_HEIGHT
        }
    }

    /// Гравитация. На земле лёгкое прижатие, в воздухе ускорение вниз.
    pub fn apply_gravity(&mut self, grounded: bool, delta: f32) {
        self.grounded = grounded;
        if grounded {
            self.velocity = -self.gravity * delta;
        } else {
            self.velocity -= self.gravity * delta;
        }
    }

    /// Прыжок/присед. Прыжок приоритетнее приседа, в присяде не прыгаем.
    pub fn handle_actions(&mut self, jump: bool, crouch: bool) {
        if self.grounded && !self.crouching {
            if jump {
                self.velocity = self.jump_force;
            } else if crouch {
                self.crouching = true;
                self.current_speed = self.speed * self.crouch_multiplier;
            }
        }

        if self.crouching && !crouch {
            self.crouching = false;
            self.current_speed = self.speed;
        }
    }

    /// Смещение за тик в системе координат тела
    pub fn motion(&self, transform: &Transform, input: &PlayerInput, delta: f32) -> Vec3 {
        let forward = *transform.forward() * input.forward * self.current_speed * delta;
        let right = *transform.right() * input.strafe * self.current_speed * delta;
        let mut motion = forward + right;
        motion.y += self.velocity * delta;
        motion
    }
}

/// Система: PlayerInput → Transform
pub fn drive_player_motor(
    time: Res<Time>,
    flags: Res<SessionFlags>,
    mut players: Query<(&mut Transform, &mut PlayerMotor, &mut PlayerInput), With<Player>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut motor, mut input) in players.iter_mut() {
        let grounded = transform.translation.y <= GROUND_HEIGHT + f32::EPSILON;
        motor.apply_gravity(grounded, delta);

        let jump = std::mem::take(&mut input.jump);
        if !flags.player_can_move {
            continue;
        }

        motor.handle_actions(jump, input.crouch);

        let motion = motor.motion(&transform, &input, delta);
        if motion == Vec3::ZERO {
            continue;
        }

        let mut next = transform.translation + motion;
        next.y = next.y.max(GROUND_HEIGHT);
        transform.translation = next;
    }
}
