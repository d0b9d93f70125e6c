//! Animation / audio sinks (fire-and-forget)
//!
//! Ядро никогда не читает результат: только сигнализирует.

/// Animator bool: агент двигается
pub const ANIM_IS_MOVING: &str = "isMoving";
/// Animator bool: агент в погоне
pub const ANIM_IS_CHASING: &str = "isChasing";
/// Animator trigger: оглушение
pub const ANIM_STUN: &str = "stun";

/// Звуковой клип состояния (адаптер мапит на реальные ассеты)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Idle,
    Wander,
    Chase,
    Stun,
}

pub trait AnimationSink: Send + Sync {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}

pub trait AudioSink: Send + Sync {
    fn play_one_shot(&mut self, cue: AudioCue);
}

/// Headless адаптер: пишет всё в debug лог
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPresentation;

impl AnimationSink for LoggingPresentation {
    fn set_bool(&mut self, name: &str, value: bool) {
        crate::log(&format!("🎞️ anim {} = {}", name, value));
    }

    fn set_trigger(&mut self, name: &str) {
        crate::log(&format!("🎞️ anim trigger {}", name));
    }
}

impl AudioSink for LoggingPresentation {
    fn play_one_shot(&mut self, cue: AudioCue) {
        crate::log(&format!("🔊 play {:?}", cue));
    }
}
