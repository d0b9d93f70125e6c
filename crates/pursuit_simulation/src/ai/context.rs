//! Enemy agent context + конфиг + таймеры
//!
//! Контекст: общий объект, над которым работают все enemy states.
//! Статичный конфиг (serde) отделён от per-entry полей (таймеры внутри states).

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai::Outcome;
use crate::services::{AnimationSink, AudioSink, MovementAgent};

/// Зона патрулирования (AABB, используется только x/z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct PatrolBounds {
    pub center: Vec3,
    /// Половина размера по каждой оси
    pub extents: Vec3,
}

impl Default for PatrolBounds {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            extents: Vec3::new(10.0, 0.0, 10.0),
        }
    }
}

impl PatrolBounds {
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Равномерная точка внутри bounds по x/z, y: переданная высота
    pub fn sample_point(&self, rng: &mut impl Rng, height: f32) -> Vec3 {
        Vec3::new(
            sample_range(rng, self.center.x - self.extents.x, self.center.x + self.extents.x),
            height,
            sample_range(rng, self.center.z - self.extents.z, self.center.z + self.extents.z),
        )
    }

    pub fn contains_xz(&self, point: Vec3) -> bool {
        (point.x - self.center.x).abs() <= self.extents.x
            && (point.z - self.center.z).abs() <= self.extents.z
    }
}

/// Uniform sample из [min, max]; вырожденный или перевёрнутый диапазон не паникует
pub fn sample_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if high - low <= f32::EPSILON {
        return low;
    }
    rng.gen_range(low..=high)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct IdleConfig {
    /// Диапазон ожидания (секунды), min..max
    pub time_range: (f32, f32),
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self { time_range: (3.0, 10.0) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct WanderConfig {
    pub speed: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self { speed: 3.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct ChaseConfig {
    pub speed: f32,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self { speed: 5.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct StunConfig {
    /// Длительность оглушения (секунды)
    pub stun_time: f32,
}

impl Default for StunConfig {
    fn default() -> Self {
        Self { stun_time: 2.0 }
    }
}

/// Параметры enemy AI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct EnemyConfig {
    /// Радиус восприятия игрока (метры)
    pub view_radius: f32,
    /// Cooldown после оглушения до следующего (секунды)
    pub stun_cooldown: f32,
    /// Stopping distance навигационного агента
    pub stopping_distance: f32,
    pub patrol_bounds: PatrolBounds,
    pub idle: IdleConfig,
    pub wander: WanderConfig,
    pub chase: ChaseConfig,
    pub stun: StunConfig,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            view_radius: 5.0,
            stun_cooldown: 3.0,
            stopping_distance: 1.0,
            patrol_bounds: PatrolBounds::default(),
            idle: IdleConfig::default(),
            wander: WanderConfig::default(),
            chase: ChaseConfig::default(),
            stun: StunConfig::default(),
        }
    }
}

/// Side effects уровня сессии (хост применяет после тика)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Показать финальный prompt (victory/defeat)
    ShowEndPrompt { victory: bool },
    /// Отключить движение игрока и mouse look
    DisablePlayerControl,
}

/// Общий контекст для всех enemy states
pub struct EnemyContext {
    pub position: Vec3,
    /// Позиция игрока (None: игрок не назначен)
    pub player: Option<Vec3>,
    pub view_radius: f32,
    pub patrol_bounds: PatrolBounds,
    /// One-way latch: после objective AI преследует безусловно
    pub force_chase_player: bool,
    pub agent: Box<dyn MovementAgent>,
    pub animation: Box<dyn AnimationSink>,
    pub audio: Box<dyn AudioSink>,
    pub rng: ChaCha8Rng,
    /// Заполняется при входе в GameOver
    pub outcome: Option<Outcome>,
    effects: Vec<SessionEffect>,
}

impl EnemyContext {
    pub fn new(
        config: &EnemyConfig,
        agent: Box<dyn MovementAgent>,
        animation: Box<dyn AnimationSink>,
        audio: Box<dyn AudioSink>,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            position: Vec3::ZERO,
            player: None,
            view_radius: config.view_radius,
            patrol_bounds: config.patrol_bounds,
            force_chase_player: false,
            agent,
            animation,
            audio,
            rng,
            outcome: None,
            effects: Vec::new(),
        }
    }

    /// Дистанция до игрока; None если игрок неизвестен
    pub fn distance_to_player(&self) -> Option<f32> {
        self.player.map(|player| self.position.distance(player))
    }

    /// Игрок известен И внутри радиуса
    pub fn player_within(&self, radius: f32) -> bool {
        self.distance_to_player()
            .is_some_and(|distance| distance <= radius)
    }

    pub fn player_in_view(&self) -> bool {
        self.player_within(self.view_radius)
    }

    /// Поставить агенту цель = игрок (если он известен)
    pub fn pursue_player(&mut self) {
        if let Some(player) = self.player {
            self.agent.set_destination(player);
        }
    }

    pub fn push_effect(&mut self, effect: SessionEffect) {
        self.effects.push(effect);
    }

    pub fn drain_effects(&mut self) -> Vec<SessionEffect> {
        std::mem::take(&mut self.effects)
    }
}

/// Cooldown: None = неактивен, Some(elapsed) растёт до threshold и сбрасывается
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CooldownTimer {
    elapsed: Option<f32>,
    threshold: f32,
}

impl CooldownTimer {
    pub fn new(threshold: f32) -> Self {
        Self {
            elapsed: None,
            threshold,
        }
    }

    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn elapsed(&self) -> Option<f32> {
        self.elapsed
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Запуск с нуля
    pub fn start(&mut self) {
        self.elapsed = Some(0.0);
    }

    pub fn advance(&mut self, delta: f32) {
        if let Some(elapsed) = self.elapsed {
            let next = elapsed + delta;
            self.elapsed = if next >= self.threshold { None } else { Some(next) };
        }
    }
}

/// Отложенное действие: срабатывает один раз, когда накоплено >= duration
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct DeferredTimer {
    elapsed: f32,
    duration: f32,
}

impl DeferredTimer {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// true ровно на том тике, когда время вышло
    pub fn advance(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        self.elapsed >= self.duration
    }
}
