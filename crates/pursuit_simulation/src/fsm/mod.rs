//! Generic FSM framework (State + StateMachine)
//!
//! Используется enemy AI, но сам по себе ничего не знает про enemy.

pub mod machine;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod machine_tests;

pub use machine::*;
