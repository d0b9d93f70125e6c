//! Simulation configuration (JSON через serde)
//!
//! Все поля опциональны: отсутствующие берутся из `Default`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::EnemyConfig;
use crate::player::PlayerConfig;
use crate::session::HudConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    /// Частота FixedUpdate (Hz)
    pub tick_hz: f64,
    pub enemy: EnemyConfig,
    pub player: PlayerConfig,
    pub hud: HudConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: 60.0,
            enemy: EnemyConfig::default(),
            player: PlayerConfig::default(),
            hud: HudConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_hz > 0.0) {
            return invalid(format!("tick_hz must be positive, got {}", self.tick_hz));
        }

        let enemy = &self.enemy;
        let non_negative = [
            ("enemy.view_radius", enemy.view_radius),
            ("enemy.stun_cooldown", enemy.stun_cooldown),
            ("enemy.stopping_distance", enemy.stopping_distance),
            ("enemy.wander.speed", enemy.wander.speed),
            ("enemy.chase.speed", enemy.chase.speed),
            ("enemy.stun.stun_time", enemy.stun.stun_time),
            ("enemy.idle.time_range.0", enemy.idle.time_range.0),
            ("enemy.idle.time_range.1", enemy.idle.time_range.1),
            ("player.gravity", self.player.gravity),
            ("player.speed", self.player.speed),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return invalid(format!("{} must be non-negative, got {}", name, value));
            }
        }

        let extents = enemy.patrol_bounds.extents;
        if extents.min_element() < 0.0 {
            return invalid(format!("enemy.patrol_bounds.extents must be non-negative, got {}", extents));
        }

        if !(self.player.look_drag > 0.0) {
            return invalid(format!("player.look_drag must be positive, got {}", self.player.look_drag));
        }

        let (min, max) = enemy.idle.time_range;
        if min > max {
            crate::log_warning(&format!(
                "Config: idle time_range ({}, {}) is reversed, sampling uses ({}, {})",
                min, max, max, min
            ));
        }

        Ok(())
    }
}

fn invalid(message: String) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(message))
}
