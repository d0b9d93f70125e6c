//! Navigation / movement capability
//!
//! Архитектура:
//! - AI states пишут high-level intent (destination, speed, stop flag)
//! - Реальный pathfinding живёт во внешнем сервисе (NavMesh agent движка)
//! - Headless симуляция использует `KinematicAgent` (прямая линия, без навмеша)

use bevy::prelude::*;

/// Минимальный контракт навигационного агента
pub trait MovementAgent: Send + Sync {
    /// Новая цель движения (перезаписывает предыдущую)
    fn set_destination(&mut self, target: Vec3);

    /// Текущая цель (None: агент ещё не получал команд)
    fn destination(&self) -> Option<Vec3>;

    fn set_stopped(&mut self, stopped: bool);

    fn is_stopped(&self) -> bool;

    fn speed(&self) -> f32;

    fn set_speed(&mut self, speed: f32);

    /// Дистанция до цели, на которой агент считает что дошёл
    fn stopping_distance(&self) -> f32;

    fn is_grounded(&self) -> bool {
        true
    }

    /// Продвинуть тело на один тик. Внешние движки двигают тело сами,
    /// по умолчанию позиция не меняется.
    fn step(&mut self, position: Vec3, _delta: f32) -> Vec3 {
        position
    }
}

/// Headless агент: идёт по прямой к destination со своей скоростью
///
/// Останавливается, как только оказался внутри stopping_distance.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct KinematicAgent {
    pub destination: Option<Vec3>,
    pub stopped: bool,
    pub speed: f32,
    pub stopping_distance: f32,
}

impl KinematicAgent {
    pub fn new(stopping_distance: f32) -> Self {
        Self {
            destination: None,
            stopped: true,
            speed: 0.0,
            stopping_distance: stopping_distance.max(0.0),
        }
    }
}

impl Default for KinematicAgent {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl MovementAgent for KinematicAgent {
    fn set_destination(&mut self, target: Vec3) {
        self.destination = Some(target);
    }

    fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn step(&mut self, position: Vec3, delta: f32) -> Vec3 {
        if self.stopped {
            return position;
        }
        let Some(target) = self.destination else {
            return position;
        };

        let to_target = target - position;
        let remaining = to_target.length();

        // Уже внутри stopping zone: стоим
        if remaining <= self.stopping_distance {
            return position;
        }

        // Не перелетаем цель: максимум до самой destination
        let travel = (self.speed * delta).min(remaining);
        position + to_target / remaining * travel
    }
}
