//! Wander: идём в случайную точку patrol bounds

use bevy::prelude::*;

use crate::ai::{EnemyContext, WanderConfig};
use crate::fsm::{State, Transition};
use crate::services::{AudioCue, GizmoBuffer, GizmoColor, ANIM_IS_CHASING, ANIM_IS_MOVING};

use super::{EnemyStateId, EnemyTransition};

pub struct WanderState {
    config: WanderConfig,
    target: Vec3,
}

impl WanderState {
    pub fn new(config: WanderConfig) -> Self {
        Self {
            config,
            target: Vec3::ZERO,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}

impl State<EnemyStateId, EnemyContext> for WanderState {
    fn on_enter(&mut self, ctx: &mut EnemyContext) {
        ctx.audio.play_one_shot(AudioCue::Wander);
        ctx.agent.set_speed(self.config.speed);
        ctx.agent.set_stopped(false);

        let height = ctx.position.y;
        self.target = ctx.patrol_bounds.sample_point(&mut ctx.rng, height);
        ctx.agent.set_destination(self.target);

        ctx.animation.set_bool(ANIM_IS_MOVING, true);
        ctx.animation.set_bool(ANIM_IS_CHASING, false);
    }

    fn on_update(&mut self, ctx: &mut EnemyContext, _delta: f32) -> EnemyTransition {
        if ctx.player_in_view() {
            return Transition::To(EnemyStateId::Chase);
        }

        if ctx.position.distance(self.target) <= ctx.agent.stopping_distance() {
            return Transition::To(EnemyStateId::Idle);
        }

        Transition::Stay
    }

    fn draw_gizmos(&self, _ctx: &EnemyContext, gizmos: &mut GizmoBuffer) {
        gizmos.wire_sphere(self.target, 0.5, GizmoColor::Magenta);
    }
}
