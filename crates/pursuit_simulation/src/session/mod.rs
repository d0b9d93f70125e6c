//! Session-level state: флаги управления, HUD, меню
//!
//! Только модель UI, виджеты и рендер живут снаружи.

pub mod flags;
pub mod hud;
pub mod menu;


pub use flags::SessionFlags;
pub use hud::*;
pub use menu::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Session Plugin (HUD + флаги управления)
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionFlags>()
            .init_resource::<HudState>()
            .init_resource::<HudConfig>()
            .init_resource::<InteractionFocus>()
            .add_systems(
                FixedUpdate,
                (advance_objective_stage, show_end_prompt, update_crosshair)
                    .chain()
                    .in_set(SimulationSet::Session),
            );
    }
}
