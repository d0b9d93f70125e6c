//! Chase: преследуем игрока до GameOver или потери из виду

use crate::ai::{ChaseConfig, EnemyContext};
use crate::fsm::{State, Transition};
use crate::services::{AudioCue, ANIM_IS_CHASING, ANIM_IS_MOVING};

use super::{EnemyStateId, EnemyTransition, GameOverState};

pub struct ChaseState {
    config: ChaseConfig,
}

impl ChaseState {
    pub fn new(config: ChaseConfig) -> Self {
        Self { config }
    }
}

impl State<EnemyStateId, EnemyContext> for ChaseState {
    fn on_enter(&mut self, ctx: &mut EnemyContext) {
        ctx.audio.play_one_shot(AudioCue::Chase);
        ctx.agent.set_stopped(false);
        ctx.agent.set_speed(self.config.speed);
        ctx.pursue_player();

        ctx.animation.set_bool(ANIM_IS_MOVING, true);
        ctx.animation.set_bool(ANIM_IS_CHASING, true);
    }

    fn on_update(&mut self, ctx: &mut EnemyContext, _delta: f32) -> EnemyTransition {
        if ctx.player_in_view() {
            if ctx.player_within(ctx.agent.stopping_distance()) {
                crate::log(&format!(
                    "💀 Chase: caught player at {:?}m",
                    ctx.distance_to_player()
                ));
                return Transition::Fresh(EnemyStateId::GameOver, Box::new(GameOverState::defeat()));
            }
            ctx.pursue_player();
            return Transition::Stay;
        }

        // Игрок вне радиуса: без force chase возвращаемся в патруль
        if !ctx.force_chase_player {
            return Transition::To(EnemyStateId::Wander);
        }

        ctx.pursue_player();
        Transition::Stay
    }
}
