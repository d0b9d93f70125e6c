//! Pursuit Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: enemy AI (FSM), gameplay сигналы,
//! interaction, HUD/session state, player motor.
//!
//! Рендер, физика, pathfinding, анимация/звук: внешние коллабораторы
//! (capability traits в `services`).

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod config;
pub mod fsm;
pub mod interaction;
pub mod logger;
pub mod player;
pub mod scene;
pub mod services;
pub mod session;
pub mod signals;


// Re-export основных типов
pub use ai::{AIPlugin, Enemy, EnemyConfig, EnemyStateId, Outcome};
pub use config::{ConfigError, SimulationConfig};
pub use fsm::{FsmError, State, StateMachine, Transition};
pub use interaction::{EndTrigger, Interactable, InteractionPlugin, ObjectiveItem};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use player::{Player, PlayerConfig, PlayerPlugin};
pub use session::{HudState, MenuPlugin, SessionFlags, SessionPlugin};
pub use signals::{
    EndPromptRequested, InteractRequest, ObjectiveActivated, SignalsPlugin, VictoryAchieved,
};

/// Порядок подсистем внутри одного FixedUpdate тика
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Motor + mouse look
    Player,
    /// InteractRequest, objective, exit зоны
    Interaction,
    /// Enemy FSM
    Ai,
    /// HUD / флаги
    Session,
}

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app
            // Fixed timestep для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            // Детерминистичный RNG (из него выдаются seeds для enemy)
            .insert_resource(DeterministicRng::new(config.seed))
            .insert_resource(config.hud.clone())
            .insert_resource(config)
            .init_resource::<services::DebugShapes>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Player,
                    SimulationSet::Interaction,
                    SimulationSet::Ai,
                    SimulationSet::Session,
                )
                    .chain(),
            )
            .add_plugins((
                SignalsPlugin,
                PlayerPlugin,
                InteractionPlugin,
                AIPlugin,
                SessionPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed для дочернего RNG (каждый enemy получает свой поток)
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    create_headless_app_with(SimulationConfig {
        seed,
        ..SimulationConfig::default()
    })
}

pub fn create_headless_app_with(config: SimulationConfig) -> App {
    init_logger();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SimulationPlugin::new(config));

    app
}

/// Snapshot компонентов для сравнения детерминизма (Debug-строки по Entity index)
pub fn world_snapshot<T>(world: &mut World) -> Vec<String>
where
    T: Component + std::fmt::Debug,
{
    let mut query = world.query::<(Entity, &T)>();
    let mut entries: Vec<_> = query
        .iter(world)
        .map(|(entity, component)| (entity.index(), format!("{:?}", component)))
        .collect();

    entries.sort_by_key(|(index, _)| *index);

    entries
        .into_iter()
        .map(|(index, dump)| format!("{}: {}", index, dump))
        .collect()
}
