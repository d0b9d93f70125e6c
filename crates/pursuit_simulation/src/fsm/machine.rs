//! Generic finite state machine
//!
//! Состояния: trait objects, адресуются ключом `K` (обычно enum).
//! Инварианты:
//! - не более одного активного состояния
//! - `on_exit` старого полностью завершается до `on_enter` нового
//! - повторный вход в тот же ключ всё равно делает exit → enter

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::services::GizmoBuffer;

/// Ключ состояния
pub trait StateKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Copy + Eq + Hash + Debug + Send + Sync + 'static> StateKey for T {}

/// Поведение одного состояния над общим контекстом `C`
pub trait State<K, C>: Send + Sync {
    fn on_enter(&mut self, ctx: &mut C);

    /// Один тик. Возвращает запрос на переход (или `Stay`).
    fn on_update(&mut self, ctx: &mut C, delta: f32) -> Transition<K, C>;

    fn on_exit(&mut self, _ctx: &mut C) {}

    fn draw_gizmos(&self, _ctx: &C, _gizmos: &mut GizmoBuffer) {}
}

/// Запрос перехода из `on_update`
pub enum Transition<K, C> {
    /// Остаёмся в текущем состоянии
    Stay,
    /// Переход в зарегистрированный инстанс
    To(K),
    /// Переход в свежесозданный инстанс (заменяет зарегистрированный под ключом)
    Fresh(K, Box<dyn State<K, C>>),
}

impl<K: Debug, C> Debug for Transition<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Stay => write!(f, "Stay"),
            Transition::To(key) => write!(f, "To({:?})", key),
            Transition::Fresh(key, _) => write!(f, "Fresh({:?})", key),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError {
    #[error("state machine has no entry state configured")]
    MissingEntryState,
    #[error("entry state {0} is not registered")]
    EntryNotRegistered(String),
    #[error("state {0} is not registered")]
    UnknownState(String),
}

/// Конечный автомат
pub struct StateMachine<K: StateKey, C> {
    states: HashMap<K, Box<dyn State<K, C>>>,
    entry: K,
    current: Option<K>,
    previous: Option<K>,
}

impl<K: StateKey, C> StateMachine<K, C> {
    pub fn builder() -> StateMachineBuilder<K, C> {
        StateMachineBuilder::default()
    }

    pub fn entry(&self) -> K {
        self.entry
    }

    pub fn current(&self) -> Option<K> {
        self.current
    }

    pub fn previous(&self) -> Option<K> {
        self.previous
    }

    pub fn is_in(&self, key: K) -> bool {
        self.current == Some(key)
    }

    /// true после первого тика (или явного `set_state`)
    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_registered(&self, key: K) -> bool {
        self.states.contains_key(&key)
    }

    /// Переход в зарегистрированное состояние
    ///
    /// Незарегистрированный ключ → ошибка, машина не трогается.
    pub fn set_state(&mut self, key: K, ctx: &mut C) -> Result<(), FsmError> {
        if !self.states.contains_key(&key) {
            return Err(FsmError::UnknownState(format!("{:?}", key)));
        }
        self.switch(key, None, ctx);
        Ok(())
    }

    /// Переход в свежий инстанс (старый под тем же ключом выбрасывается после exit)
    pub fn set_fresh_state(&mut self, key: K, state: Box<dyn State<K, C>>, ctx: &mut C) {
        self.switch(key, Some(state), ctx);
    }

    /// Один тик: активирует entry на первом тике, затем update текущего состояния
    pub fn tick(&mut self, ctx: &mut C, delta: f32) -> Result<(), FsmError> {
        let key = match self.current {
            Some(key) => key,
            None => {
                self.set_state(self.entry, ctx)?;
                self.entry
            }
        };

        let transition = match self.states.get_mut(&key) {
            Some(state) => state.on_update(ctx, delta),
            None => return Err(FsmError::UnknownState(format!("{:?}", key))),
        };

        match transition {
            Transition::Stay => Ok(()),
            Transition::To(next) => self.set_state(next, ctx),
            Transition::Fresh(next, state) => {
                self.set_fresh_state(next, state, ctx);
                Ok(())
            }
        }
    }

    pub fn draw_gizmos(&self, ctx: &C, gizmos: &mut GizmoBuffer) {
        if let Some(state) = self.current.and_then(|key| self.states.get(&key)) {
            state.draw_gizmos(ctx, gizmos);
        }
    }

    fn switch(&mut self, key: K, replacement: Option<Box<dyn State<K, C>>>, ctx: &mut C) {
        if let Some(old) = self.current {
            if let Some(state) = self.states.get_mut(&old) {
                state.on_exit(ctx);
            }
        }

        if let Some(state) = replacement {
            self.states.insert(key, state);
        }

        self.previous = self.current;
        self.current = Some(key);

        if let Some(state) = self.states.get_mut(&key) {
            state.on_enter(ctx);
        }
    }
}

/// Builder: регистрирует состояния и обязательный entry
pub struct StateMachineBuilder<K: StateKey, C> {
    states: HashMap<K, Box<dyn State<K, C>>>,
    entry: Option<K>,
}

impl<K: StateKey, C> Default for StateMachineBuilder<K, C> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            entry: None,
        }
    }
}

impl<K: StateKey, C> StateMachineBuilder<K, C> {
    pub fn entry(mut self, key: K) -> Self {
        self.entry = Some(key);
        self
    }

    pub fn state(mut self, key: K, state: impl State<K, C> + 'static) -> Self {
        self.states.insert(key, Box::new(state));
        self
    }

    pub fn build(self) -> Result<StateMachine<K, C>, FsmError> {
        let entry = self.entry.ok_or(FsmError::MissingEntryState)?;
        if !self.states.contains_key(&entry) {
            return Err(FsmError::EntryNotRegistered(format!("{:?}", entry)));
        }

        Ok(StateMachine {
            states: self.states,
            entry,
            current: None,
            previous: None,
        })
    }
}
