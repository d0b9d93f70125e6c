//! Зона выхода: после objective вход игрока = победа

use bevy::prelude::*;

/// Exit zone (сфера вокруг Transform)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct EndTrigger {
    pub radius: f32,
    armed: bool,
    fired: bool,
}

impl Default for EndTrigger {
    fn default() -> Self {
        Self::new(1.5)
    }
}

impl EndTrigger {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            armed: false,
            fired: false,
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// true только при первом срабатывании взведённого триггера
    pub fn try_fire(&mut self) -> bool {
        if !self.armed || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
