//! Window contract for presentation backends.
//!
//! The engine never draws by itself: each frame it hands a finished
//! [`RenderBuffer`] plus the frame's audio requests to a [`Window`]
//! implementation, and pulls input events back out of it.

use glam::Vec2;

use crate::api::types::{MusicEvent, SoundEvent};
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;

pub trait Window {
    /// Backend identifier (e.g. "headless", "sfml", "wgpu").
    fn backend(&self) -> &'static str;

    fn is_open(&self) -> bool;

    /// Drawable size in pixels.
    fn size(&self) -> Vec2;

    /// Move every pending window event into `queue`.
    fn poll_events(&mut self, queue: &mut InputQueue);

    fn clear(&mut self, color: [u8; 3]);

    /// Draw and display a finished frame.
    fn present(&mut self, frame: &RenderBuffer);

    /// Play this frame's audio requests. Fire-and-forget.
    fn play_audio(&mut self, _sounds: &[SoundEvent], _music: &[MusicEvent]) {}

    fn close(&mut self);
}
