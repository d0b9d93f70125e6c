//! Enemy state graph: Idle → Wander → Chase → Stun / GameOver

pub mod chase;
pub mod game_over;
pub mod idle;
pub mod stun;
pub mod wander;

pub use chase::ChaseState;
pub use game_over::{GameOverState, Outcome};
pub use idle::IdleState;
pub use stun::StunState;
pub use wander::WanderState;

use crate::ai::EnemyContext;
use crate::fsm::Transition;

/// Ключи enemy FSM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyStateId {
    Idle,
    Wander,
    Chase,
    Stun,
    /// Терминальное; каждый раз создаётся заново
    GameOver,
}

impl EnemyStateId {
    /// Состояния, которые perception override не перебивает
    pub fn ignores_perception(&self) -> bool {
        matches!(self, Self::Chase | Self::Stun | Self::GameOver)
    }
}

pub type EnemyTransition = Transition<EnemyStateId, EnemyContext>;
