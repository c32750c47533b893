use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{MusicEvent, SoundEvent};
use crate::input::queue::{InputEvent, InputQueue, KeyCode};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::window::Window;

/// One scripted key transition, as stored in a JSON input script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedKey {
    /// Frame number (0-based) at which the event is delivered.
    pub frame: u64,
    pub key: KeyCode,
    /// true = key down, false = key up.
    pub pressed: bool,
}

/// Offscreen window that replays scripted input and records what was presented.
///
/// Closes itself after `max_frames` presented frames, if set.
#[derive(Debug)]
pub struct HeadlessWindow {
    size: Vec2,
    open: bool,
    frame: u64,
    max_frames: Option<u64>,
    script: BTreeMap<u64, Vec<InputEvent>>,
    last_frame: Option<RenderBuffer>,
    /// Instance bytes a GPU backend would have uploaded, summed over all frames.
    uploaded_bytes: u64,
    sounds: Vec<SoundEvent>,
    music: Vec<MusicEvent>,
}

impl HeadlessWindow {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            open: true,
            frame: 0,
            max_frames: None,
            script: BTreeMap::new(),
            last_frame: None,
            uploaded_bytes: 0,
            sounds: Vec::new(),
            music: Vec::new(),
        }
    }

    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Queue an event for delivery at the start of `frame`.
    pub fn schedule(&mut self, frame: u64, event: InputEvent) {
        self.script.entry(frame).or_default().push(event);
    }

    pub fn with_script(mut self, keys: &[ScriptedKey]) -> Self {
        for k in keys {
            let event = if k.pressed {
                InputEvent::KeyDown { key: k.key }
            } else {
                InputEvent::KeyUp { key: k.key }
            };
            self.schedule(k.frame, event);
        }
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.frame
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&RenderBuffer> {
        self.last_frame.as_ref()
    }

    pub fn uploaded_bytes(&self) -> u64 {
        self.uploaded_bytes
    }

    /// Every sound played so far.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }

    /// Every music request so far.
    pub fn music(&self) -> &[MusicEvent] {
        &self.music
    }
}

impl Window for HeadlessWindow {
    fn backend(&self) -> &'static str {
        "headless"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn poll_events(&mut self, queue: &mut InputQueue) {
        if let Some(events) = self.script.remove(&self.frame) {
            for event in events {
                if let InputEvent::Resized { width, height } = event {
                    self.size = Vec2::new(width, height);
                }
                queue.push(event);
            }
        }
    }

    fn clear(&mut self, _color: [u8; 3]) {}

    fn present(&mut self, frame: &RenderBuffer) {
        self.uploaded_bytes += frame.instance_bytes().len() as u64;
        self.last_frame = Some(frame.clone());
        self.frame += 1;
        if self.max_frames.is_some_and(|max| self.frame >= max) {
            self.open = false;
        }
    }

    fn play_audio(&mut self, sounds: &[SoundEvent], music: &[MusicEvent]) {
        self.sounds.extend_from_slice(sounds);
        self.music.extend_from_slice(music);
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::Camera2D;
    use crate::renderer::instance::RenderInstance;

    #[test]
    fn delivers_scripted_events_on_their_frame() {
        let mut window = HeadlessWindow::new(800.0, 600.0).with_script(&[
            ScriptedKey { frame: 1, key: KeyCode::E, pressed: true },
        ]);
        let mut queue = InputQueue::new();
        let frame = RenderBuffer::new(Camera2D::new(800.0, 600.0));

        window.poll_events(&mut queue);
        assert!(queue.is_empty());
        window.present(&frame);

        window.poll_events(&mut queue);
        assert_eq!(queue.drain(), vec![InputEvent::KeyDown { key: KeyCode::E }]);
    }

    #[test]
    fn closes_after_max_frames() {
        let mut window = HeadlessWindow::new(10.0, 10.0).with_max_frames(2);
        let frame = RenderBuffer::new(Camera2D::new(10.0, 10.0));
        window.present(&frame);
        assert!(window.is_open());
        window.present(&frame);
        assert!(!window.is_open());
        assert_eq!(window.frames_presented(), 2);
    }

    #[test]
    fn present_counts_instance_upload() {
        let mut window = HeadlessWindow::new(10.0, 10.0);
        let mut frame = RenderBuffer::new(Camera2D::new(10.0, 10.0));
        frame.push(RenderInstance::default());
        frame.push(RenderInstance::default());
        window.present(&frame);
        window.present(&frame);
        assert_eq!(window.uploaded_bytes(), 4 * RenderInstance::STRIDE_BYTES as u64);
    }

    #[test]
    fn script_parses_from_json() {
        let keys: Vec<ScriptedKey> =
            serde_json::from_str(r#"[{ "frame": 3, "key": "Left", "pressed": true }]"#).unwrap();
        assert_eq!(keys[0].key, KeyCode::Left);
    }
}
