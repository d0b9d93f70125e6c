//! GameOver: терминальное состояние сессии

use crate::ai::{EnemyContext, SessionEffect};
use crate::fsm::{State, Transition};

use super::{EnemyStateId, EnemyTransition};

/// Чем закончилась сессия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Enemy поймал игрока
    Defeat,
    /// Игрок добрался до выхода
    Victory,
}

pub struct GameOverState {
    outcome: Outcome,
}

impl GameOverState {
    pub fn defeat() -> Self {
        Self {
            outcome: Outcome::Defeat,
        }
    }

    pub fn victory() -> Self {
        Self {
            outcome: Outcome::Victory,
        }
    }
}

impl State<EnemyStateId, EnemyContext> for GameOverState {
    fn on_enter(&mut self, ctx: &mut EnemyContext) {
        ctx.agent.set_stopped(true);
        ctx.outcome = Some(self.outcome);

        // Victory prompt показывает end trigger, здесь только поражение
        if self.outcome == Outcome::Defeat && ctx.player_within(ctx.agent.stopping_distance()) {
            ctx.push_effect(SessionEffect::ShowEndPrompt { victory: false });
        }
        ctx.push_effect(SessionEffect::DisablePlayerControl);

        crate::log_info(&format!("🏁 GameOver ({:?})", self.outcome));
    }

    fn on_update(&mut self, _ctx: &mut EnemyContext, _delta: f32) -> EnemyTransition {
        Transition::Stay
    }
}
