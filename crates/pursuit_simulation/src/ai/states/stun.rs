//! Stun: стоим оглушённые stun_time секунд

use crate::ai::{EnemyContext, StunConfig};
use crate::fsm::{State, Transition};
use crate::services::{AudioCue, ANIM_IS_CHASING, ANIM_IS_MOVING, ANIM_STUN};

use super::{EnemyStateId, EnemyTransition};

pub struct StunState {
    config: StunConfig,
    timer: Option<f32>,
}

impl StunState {
    pub fn new(config: StunConfig) -> Self {
        Self {
            config,
            timer: None,
        }
    }

    pub fn stun_time(&self) -> f32 {
        self.config.stun_time
    }
}

impl State<EnemyStateId, EnemyContext> for StunState {
    fn on_enter(&mut self, ctx: &mut EnemyContext) {
        ctx.audio.play_one_shot(AudioCue::Stun);
        ctx.agent.set_stopped(true);

        ctx.animation.set_trigger(ANIM_STUN);
        ctx.animation.set_bool(ANIM_IS_MOVING, false);
        ctx.animation.set_bool(ANIM_IS_CHASING, false);

        self.timer = Some(0.0);
    }

    fn on_update(&mut self, ctx: &mut EnemyContext, delta: f32) -> EnemyTransition {
        let Some(timer) = self.timer.as_mut() else {
            return Transition::Stay;
        };

        *timer += delta;
        if *timer < self.config.stun_time {
            return Transition::Stay;
        }

        self.timer = None;
        if ctx.force_chase_player {
            Transition::To(EnemyStateId::Chase)
        } else {
            Transition::To(EnemyStateId::Wander)
        }
    }

    fn on_exit(&mut self, _ctx: &mut EnemyContext) {
        crate::log("Exited stun state.");
    }
}
