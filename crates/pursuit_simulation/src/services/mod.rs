//! Capability интерфейсы внешних коллабораторов
//!
//! Navigation, animation, audio, debug draw: ядро только пишет/читает через эти traits.
//! Конкретные адаптеры (движок / headless) инжектятся при сборке entity.

pub mod debug_draw;
pub mod movement;
pub mod presentation;

#[cfg(test)]
mod movement_tests;

pub use debug_draw::*;
pub use movement::*;
pub use presentation::*;
