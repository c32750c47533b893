//! Animation component for sprite frame sequences.
//!
//! Frames are laid out as a horizontal strip: frame `i` is the first frame's
//! rect shifted right by `i` frame widths.

use crate::core::geometry::Rect;

/// Playback state for one strip animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Animation record name.
    pub name: String,
    /// Texture holding the strip.
    pub texture: String,
    /// Rect of frame 0.
    pub first_frame: Rect,
    /// Current frame index.
    pub frame_index: usize,
    /// Number of frames in the strip.
    pub frame_count: usize,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether to wrap around when reaching the end.
    pub repeat: bool,
    /// Time accumulated in the current frame.
    frame_timer: f32,
}

impl Animation {
    pub fn new(
        name: impl Into<String>,
        texture: impl Into<String>,
        first_frame: Rect,
        frame_count: usize,
        frame_duration: f32,
        repeat: bool,
    ) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
            first_frame,
            frame_index: 0,
            frame_count: frame_count.max(1),
            frame_duration,
            repeat,
            frame_timer: 0.0,
        }
    }

    /// Texture rect for the current frame.
    pub fn current_rect(&self) -> Rect {
        Rect {
            left: self.first_frame.left + self.first_frame.width * self.frame_index as f32,
            ..self.first_frame
        }
    }

    /// True once a non-repeating animation sits on its last frame.
    pub fn has_ended(&self) -> bool {
        !self.repeat && self.frame_index + 1 >= self.frame_count
    }

    /// Advance by `dt` seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.frame_duration <= 0.0 || self.has_ended() {
            return false;
        }

        self.frame_timer += dt;
        let mut frame_changed = false;

        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.frame_index += 1;
            frame_changed = true;

            if self.frame_index >= self.frame_count {
                if self.repeat {
                    self.frame_index = 0;
                } else {
                    self.frame_index = self.frame_count - 1;
                    break;
                }
            }
        }

        frame_changed
    }
}
