//! HUD модель: текст objective, crosshair, финальный prompt

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::session::SessionFlags;
use crate::signals::{EndPromptRequested, ObjectiveActivated};

/// Тексты HUD
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// До подбора objective
    pub objective_a: String,
    /// После подбора objective
    pub objective_b: String,
    pub victory_message: String,
    pub game_over_message: String,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            objective_a: "Find the relic".to_string(),
            objective_b: "Escape through the exit".to_string(),
            victory_message: "You escaped.".to_string(),
            game_over_message: "You were caught.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectiveStage {
    #[default]
    FindObjective,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crosshair {
    /// Ничего интерактивного под прицелом
    #[default]
    Red,
    Green,
}

/// Внешний interaction probe пишет сюда, смотрит ли игрок на interactable
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFocus {
    pub on_interactable: bool,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct HudState {
    pub stage: ObjectiveStage,
    pub crosshair: Crosshair,
    /// Some(victory): prompt показан
    pub end_prompt: Option<bool>,
    pub cursor_locked: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            stage: ObjectiveStage::FindObjective,
            crosshair: Crosshair::Red,
            end_prompt: None,
            cursor_locked: true,
        }
    }
}

impl HudState {
    pub fn objective_text<'a>(&self, config: &'a HudConfig) -> &'a str {
        match self.stage {
            ObjectiveStage::FindObjective => &config.objective_a,
            ObjectiveStage::Escape => &config.objective_b,
        }
    }

    pub fn prompt_message<'a>(&self, config: &'a HudConfig) -> Option<&'a str> {
        self.end_prompt.map(|victory| {
            if victory {
                config.victory_message.as_str()
            } else {
                config.game_over_message.as_str()
            }
        })
    }

    /// Показать prompt (один раз за сессию). Отключает управление, отпускает курсор.
    pub fn show_end_prompt(&mut self, victory: bool, flags: &mut SessionFlags) -> bool {
        if self.end_prompt.is_some() {
            return false;
        }
        self.end_prompt = Some(victory);
        self.cursor_locked = false;
        flags.disable_player_control();
        true
    }

    pub fn set_crosshair(&mut self, crosshair: Crosshair) {
        if self.crosshair != crosshair {
            self.crosshair = crosshair;
        }
    }
}

/// Система: objective подобран → второй текст цели
pub fn advance_objective_stage(
    mut signals: EventReader<ObjectiveActivated>,
    mut hud: ResMut<HudState>,
) {
    for _ in signals.read() {
        hud.stage = ObjectiveStage::Escape;
    }
}

/// Система: EndPromptRequested → prompt + блокировка управления
pub fn show_end_prompt(
    mut requests: EventReader<EndPromptRequested>,
    mut hud: ResMut<HudState>,
    mut flags: ResMut<SessionFlags>,
) {
    for request in requests.read() {
        if hud.show_end_prompt(request.victory, &mut flags) {
            crate::log_info(&format!("HUD: end prompt (victory: {})", request.victory));
        }
    }
}

/// Система: цвет crosshair от interaction focus
pub fn update_crosshair(focus: Res<InteractionFocus>, mut hud: ResMut<HudState>) {
    let crosshair = if focus.on_interactable {
        Crosshair::Green
    } else {
        Crosshair::Red
    };

    if hud.crosshair != crosshair {
        hud.set_crosshair(crosshair);
    }
}
