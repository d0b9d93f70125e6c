//! Gameplay события
//!
//! Без payload (кроме адресата/исхода): чистые уведомления.

use bevy::prelude::*;

/// Objective подобран (не чаще одного раза за сессию, см. `ObjectiveLatch`)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveActivated;

/// Игрок дошёл до выхода после objective
///
/// Шина не ограничивает повторы: идемпотентность на стороне издателя (EndTrigger).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryAchieved;

/// Игрок активирует interactable
///
/// Генерируется внешним interaction probe (raycast + кнопка).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractRequest {
    pub target: Entity,
}

/// Показать финальный prompt сессии
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndPromptRequested {
    pub victory: bool,
}

/// Session latch: objective signal публикуется максимум один раз
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectiveLatch {
    tripped: bool,
}

impl ObjectiveLatch {
    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    /// true только при первом вызове
    pub fn try_trip(&mut self) -> bool {
        if self.tripped {
            return false;
        }
        self.tripped = true;
        true
    }
}
