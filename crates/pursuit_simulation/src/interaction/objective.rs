//! Objective pickup

use bevy::prelude::*;

use super::Interactable;

/// Предмет-цель. После первой активации повторные игнорируются.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ObjectiveItem {
    activated: bool,
    /// Активирован, но сигнал ещё не опубликован
    pending_publish: bool,
}

impl ObjectiveItem {
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn is_pending(&self) -> bool {
        self.pending_publish
    }

    /// Забрать pending publish (true ровно один раз после активации)
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending_publish)
    }
}

impl Interactable for ObjectiveItem {
    fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.pending_publish = true;
    }
}
