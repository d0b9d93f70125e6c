//! Test fakes: записывающие animation/audio sinks + сборка контекста

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::{Enemy, EnemyConfig, EnemyContext, IdleConfig};
use crate::services::{AnimationSink, AudioCue, AudioSink, KinematicAgent};

#[derive(Debug, Default)]
pub struct Recording {
    pub bools: Vec<(String, bool)>,
    pub triggers: Vec<String>,
    pub cues: Vec<AudioCue>,
}

impl Recording {
    /// Последнее значение animator bool
    pub fn last_bool(&self, name: &str) -> Option<bool> {
        self.bools
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }
}

pub type SharedRecording = Arc<Mutex<Recording>>;

pub struct RecordingAnimation(pub SharedRecording);

impl AnimationSink for RecordingAnimation {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.0.lock().unwrap().bools.push((name.to_string(), value));
    }

    fn set_trigger(&mut self, name: &str) {
        self.0.lock().unwrap().triggers.push(name.to_string());
    }
}

pub struct RecordingAudio(pub SharedRecording);

impl AudioSink for RecordingAudio {
    fn play_one_shot(&mut self, cue: AudioCue) {
        self.0.lock().unwrap().cues.push(cue);
    }
}

pub fn recording() -> SharedRecording {
    Arc::new(Mutex::new(Recording::default()))
}

/// Конфиг с фиксированным idle (5 секунд) для детерминированных таймингов
pub fn fixed_idle_config() -> EnemyConfig {
    EnemyConfig {
        idle: IdleConfig {
            time_range: (5.0, 5.0),
        },
        ..EnemyConfig::default()
    }
}

pub fn context(config: &EnemyConfig, recording: &SharedRecording) -> EnemyContext {
    EnemyContext::new(
        config,
        Box::new(KinematicAgent::new(config.stopping_distance)),
        Box::new(RecordingAnimation(recording.clone())),
        Box::new(RecordingAudio(recording.clone())),
        ChaCha8Rng::seed_from_u64(7),
    )
}

pub fn enemy(config: &EnemyConfig, recording: &SharedRecording) -> Enemy {
    Enemy::new(
        config,
        Box::new(KinematicAgent::new(config.stopping_distance)),
        Box::new(RecordingAnimation(recording.clone())),
        Box::new(RecordingAudio(recording.clone())),
        7,
    )
    .expect("enemy FSM is valid")
}
