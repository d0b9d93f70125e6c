//! Enemy host: владеет FSM, контекстом, stun cooldown
//!
//! Порядок одного тика (`Enemy::tick`):
//! 1. FSM tick (update текущего состояния + запрошенный переход)
//! 2. Perception override (игрок в радиусе → Chase, кроме Chase/Stun/GameOver)
//! 3. Stun cooldown (если активен)
//! 4. Отложенный старт cooldown после оглушения

use std::fmt;

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::{
    ChaseState, CooldownTimer, DeferredTimer, EnemyConfig, EnemyContext, EnemyStateId,
    GameOverState, IdleState, Outcome, SessionEffect, StunState, WanderState,
};
use crate::fsm::{FsmError, StateMachine};
use crate::interaction::Interactable;
use crate::services::{
    AnimationSink, AudioSink, GizmoBuffer, GizmoColor, KinematicAgent, LoggingPresentation,
    MovementAgent,
};

/// Enemy AI (один на сцену)
#[derive(Component)]
pub struct Enemy {
    machine: StateMachine<EnemyStateId, EnemyContext>,
    ctx: EnemyContext,
    cooldown: CooldownTimer,
    /// Pending: через stun_time после оглушения запустить cooldown
    stun_release: Option<DeferredTimer>,
    stun_time: f32,
}

impl Enemy {
    pub fn new(
        config: &EnemyConfig,
        agent: Box<dyn MovementAgent>,
        animation: Box<dyn AnimationSink>,
        audio: Box<dyn AudioSink>,
        seed: u64,
    ) -> Result<Self, FsmError> {
        let machine = StateMachine::builder()
            .entry(EnemyStateId::Idle)
            .state(EnemyStateId::Idle, IdleState::new(config.idle.clone()))
            .state(EnemyStateId::Wander, WanderState::new(config.wander.clone()))
            .state(EnemyStateId::Chase, ChaseState::new(config.chase.clone()))
            .state(EnemyStateId::Stun, StunState::new(config.stun.clone()))
            .build()?;

        let ctx = EnemyContext::new(
            config,
            agent,
            animation,
            audio,
            ChaCha8Rng::seed_from_u64(seed),
        );

        Ok(Self {
            machine,
            ctx,
            cooldown: CooldownTimer::new(config.stun_cooldown),
            stun_release: None,
            stun_time: config.stun.stun_time,
        })
    }

    /// Headless enemy: прямолинейный агент + логирующие anim/audio sinks
    pub fn headless(config: &EnemyConfig, seed: u64) -> Result<Self, FsmError> {
        Self::new(
            config,
            Box::new(KinematicAgent::new(config.stopping_distance)),
            Box::new(LoggingPresentation),
            Box::new(LoggingPresentation),
            seed,
        )
    }

    pub fn state(&self) -> Option<EnemyStateId> {
        self.machine.current()
    }

    pub fn is_in(&self, state: EnemyStateId) -> bool {
        self.machine.is_in(state)
    }

    pub fn force_chase_player(&self) -> bool {
        self.ctx.force_chase_player
    }

    pub fn cooldown(&self) -> &CooldownTimer {
        &self.cooldown
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.ctx.outcome
    }

    pub fn position(&self) -> Vec3 {
        self.ctx.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.ctx.position = position;
    }

    /// Sensor: позиция игрока (None: игрок не назначен)
    pub fn set_player_position(&mut self, player: Option<Vec3>) {
        self.ctx.player = player;
    }

    pub fn distance_to_player(&self) -> Option<f32> {
        self.ctx.distance_to_player()
    }

    pub fn agent(&self) -> &dyn MovementAgent {
        self.ctx.agent.as_ref()
    }

    pub fn context(&self) -> &EnemyContext {
        &self.ctx
    }

    /// Оглушение разрешено: cooldown неактивен, не в Stun и не в GameOver
    pub fn can_be_stunned(&self) -> bool {
        !self.cooldown.is_active()
            && !matches!(
                self.machine.current(),
                Some(EnemyStateId::Stun | EnemyStateId::GameOver)
            )
    }

    /// Один simulation tick
    pub fn tick(&mut self, delta: f32) {
        let before = self.machine.current();
        if let Err(err) = self.machine.tick(&mut self.ctx, delta) {
            crate::log_error(&format!("AI: enemy FSM tick failed: {}", err));
        }
        let after = self.machine.current();
        if before != after {
            crate::log(&format!("AI: enemy {:?} → {:?}", before, after));
        }

        self.apply_perception_override();

        self.cooldown.advance(delta);

        if let Some(release) = self.stun_release.as_mut() {
            if release.advance(delta) {
                self.stun_release = None;
                self.cooldown.start();
                crate::log("AI: stun over, cooldown started");
            }
        }
    }

    /// Global event: objective подобран
    pub fn on_objective_activated(&mut self) {
        if self.ctx.force_chase_player {
            return;
        }

        crate::log_info("Start chasing the player");
        self.ctx.force_chase_player = true;

        // GameOver терминален: флаг ставим, но из него не выходим
        if self.machine.is_in(EnemyStateId::GameOver) {
            return;
        }
        self.transition(EnemyStateId::Chase);
    }

    /// Global event: победа игрока
    pub fn on_victory(&mut self) {
        let from = self.machine.current();
        self.machine
            .set_fresh_state(EnemyStateId::GameOver, Box::new(GameOverState::victory()), &mut self.ctx);
        crate::log(&format!("AI: enemy {:?} → GameOver (victory)", from));
    }

    pub fn drain_effects(&mut self) -> Vec<SessionEffect> {
        self.ctx.drain_effects()
    }

    /// Продвинуть тело через навигационный агент, вернуть новую позицию
    pub fn advance_agent(&mut self, delta: f32) -> Vec3 {
        let next = self.ctx.agent.step(self.ctx.position, delta);
        self.ctx.position = next;
        next
    }

    pub fn draw_gizmos(&self, gizmos: &mut GizmoBuffer) {
        let bounds = self.ctx.patrol_bounds;
        gizmos.wire_cube(bounds.center, bounds.size(), GizmoColor::Red);
        gizmos.wire_sphere(self.ctx.position, self.ctx.view_radius, GizmoColor::Blue);
        self.machine.draw_gizmos(&self.ctx, gizmos);
    }

    fn apply_perception_override(&mut self) {
        let Some(current) = self.machine.current() else {
            return;
        };

        if !current.ignores_perception() && self.ctx.player_in_view() {
            self.transition(EnemyStateId::Chase);
        }
    }

    fn transition(&mut self, next: EnemyStateId) {
        let from = self.machine.current();
        match self.machine.set_state(next, &mut self.ctx) {
            Ok(()) => crate::log(&format!("AI: enemy {:?} → {:?}", from, next)),
            Err(err) => crate::log_error(&format!("AI: enemy transition failed: {}", err)),
        }
    }
}

impl Interactable for Enemy {
    /// Попытка оглушить
    fn activate(&mut self) {
        if !self.can_be_stunned() {
            crate::log(&format!(
                "AI: stun ignored (state {:?}, cooldown {:?})",
                self.machine.current(),
                self.cooldown.elapsed()
            ));
            return;
        }

        crate::log("Activate stun");
        self.transition(EnemyStateId::Stun);
        self.stun_release = Some(DeferredTimer::new(self.stun_time));
    }
}

impl fmt::Debug for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enemy")
            .field("state", &self.machine.current())
            .field("position", &self.ctx.position)
            .field("force_chase_player", &self.ctx.force_chase_player)
            .field("cooldown", &self.cooldown)
            .field("outcome", &self.ctx.outcome)
            .finish()
    }
}
