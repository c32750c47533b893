use crate::api::types::MusicEvent;

/// Background music service. Requests are queued for the window backend.
#[derive(Debug, Clone)]
pub struct MusicPlayer {
    current: Option<String>,
    volume: f32,
    pending: Vec<MusicEvent>,
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self {
            current: None,
            volume: 100.0,
            pending: Vec::new(),
        }
    }
}

impl MusicPlayer {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 100.0),
            ..Default::default()
        }
    }

    /// Start `name`, replacing the current track. Replaying the current track is a no-op.
    pub fn play(&mut self, name: &str) {
        if self.current.as_deref() == Some(name) {
            return;
        }
        log::debug!("music: play {}", name);
        self.current = Some(name.to_string());
        self.pending.push(MusicEvent::Play {
            name: name.to_string(),
            volume: self.volume,
        });
    }

    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.pending.push(MusicEvent::Stop);
        }
    }

    /// Volume in 0..=100.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 100.0);
        self.pending.push(MusicEvent::SetVolume(self.volume));
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Take the requests queued since the last drain.
    pub fn drain(&mut self) -> Vec<MusicEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaying_current_track_is_ignored() {
        let mut music = MusicPlayer::new(50.0);
        music.play("gameTheme");
        music.play("gameTheme");
        assert_eq!(music.drain().len(), 1);
        assert_eq!(music.current(), Some("gameTheme"));
    }

    #[test]
    fn volume_is_clamped() {
        let mut music = MusicPlayer::default();
        music.set_volume(250.0);
        assert_eq!(music.volume(), 100.0);
        assert_eq!(music.drain(), vec![MusicEvent::SetVolume(100.0)]);
    }

    #[test]
    fn stop_without_track_queues_nothing() {
        let mut music = MusicPlayer::default();
        music.stop();
        assert!(music.drain().is_empty());
    }
}
