use glam::Vec2;

use crate::api::types::SoundEvent;

#[derive(Debug, Clone)]
struct ActiveSound {
    name: String,
    remaining: f32,
}

/// One-shot sound effect service.
///
/// `play` queues a [`SoundEvent`] for the window backend and tracks the sound
/// until its duration runs out; `remove_stopped_sounds` drops finished ones.
#[derive(Debug, Clone)]
pub struct SoundPlayer {
    volume: f32,
    pending: Vec<SoundEvent>,
    active: Vec<ActiveSound>,
}

impl Default for SoundPlayer {
    fn default() -> Self {
        Self {
            volume: 100.0,
            pending: Vec::new(),
            active: Vec::new(),
        }
    }
}

impl SoundPlayer {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 100.0),
            ..Default::default()
        }
    }

    /// Play `name` for `duration` seconds, non-positional.
    pub fn play(&mut self, name: &str, duration: f32) {
        self.start(name, None, duration);
    }

    /// Play `name` at a world position.
    pub fn play_at(&mut self, name: &str, position: Vec2, duration: f32) {
        self.start(name, Some(position), duration);
    }

    fn start(&mut self, name: &str, position: Option<Vec2>, duration: f32) {
        log::trace!("sound: play {}", name);
        self.pending.push(SoundEvent {
            name: name.to_string(),
            position,
            volume: self.volume,
        });
        self.active.push(ActiveSound {
            name: name.to_string(),
            remaining: duration,
        });
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 100.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Count down every playing sound by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for sound in &mut self.active {
            sound.remaining -= dt;
        }
    }

    /// Forget sounds that have finished playing.
    pub fn remove_stopped_sounds(&mut self) {
        self.active.retain(|s| s.remaining > 0.0);
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.active.iter().any(|s| s.name == name)
    }

    pub fn playing_count(&self) -> usize {
        self.active.len()
    }

    /// Take the play requests queued since the last drain.
    pub fn drain(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.pending)
    }
}
