//! Idle: стоим случайное время, потом Wander

use crate::ai::{sample_range, EnemyContext, IdleConfig};
use crate::fsm::{State, Transition};
use crate::services::{AudioCue, ANIM_IS_MOVING};

use super::{EnemyStateId, EnemyTransition};

pub struct IdleState {
    config: IdleConfig,
    /// None: состояние не активно
    timer: Option<f32>,
    idle_time: f32,
}

impl IdleState {
    pub fn new(config: IdleConfig) -> Self {
        Self {
            config,
            timer: None,
            idle_time: 0.0,
        }
    }

    /// Выбранная на входе длительность ожидания
    pub fn idle_time(&self) -> f32 {
        self.idle_time
    }

    pub fn timer(&self) -> Option<f32> {
        self.timer
    }
}

impl State<EnemyStateId, EnemyContext> for IdleState {
    fn on_enter(&mut self, ctx: &mut EnemyContext) {
        ctx.audio.play_one_shot(AudioCue::Idle);
        ctx.agent.set_stopped(true);

        let (min, max) = self.config.time_range;
        self.idle_time = sample_range(&mut ctx.rng, min, max);
        self.timer = Some(0.0);

        ctx.animation.set_bool(ANIM_IS_MOVING, false);
    }

    fn on_update(&mut self, ctx: &mut EnemyContext, delta: f32) -> EnemyTransition {
        // Игрок в поле зрения → Wander. Хост в том же тике всё равно
        // перебивает это в Chase через perception override.
        if ctx.player_in_view() {
            return Transition::To(EnemyStateId::Wander);
        }

        if let Some(timer) = self.timer.as_mut() {
            *timer += delta;
            if *timer >= self.idle_time {
                return Transition::To(EnemyStateId::Wander);
            }
        }

        Transition::Stay
    }

    fn on_exit(&mut self, _ctx: &mut EnemyContext) {
        self.timer = None;
        self.idle_time = 0.0;
    }
}
