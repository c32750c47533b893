use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::layer::RenderLayer;
use crate::core::geometry::Rect;
use crate::renderer::camera::Camera2D;

/// Per-instance sprite data handed to the window backend.
/// 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space (top-left of the quad).
    pub x: f32,
    /// Y position in world space (top-left of the quad).
    pub y: f32,
    /// World-space width.
    pub width: f32,
    /// World-space height.
    pub height: f32,
    /// Rotation in degrees around the quad center.
    pub rotation: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Index into [`RenderBuffer::textures`].
    pub texture: f32,
    /// Source rect in texture pixels. Zero width/height means the whole texture.
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    /// Layer id, see [`RenderLayer`].
    pub layer: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Outline rectangle, used for debug collision boxes and HUD panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeCommand {
    pub rect: Rect,
    /// RGBA, 0..=255.
    pub color: [u8; 4],
    /// Filled panel (true) or outline (false).
    pub filled: bool,
    pub layer: RenderLayer,
}

/// Text drawn in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub font: String,
    pub size: u32,
    pub pos: Vec2,
    pub color: [u8; 4],
}

/// Everything the window needs to present one frame.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    /// Sprite instances in draw order once [`RenderBuffer::finish`] ran.
    pub instances: Vec<RenderInstance>,
    /// Texture names referenced by `RenderInstance::texture`.
    pub textures: Vec<String>,
    pub shapes: Vec<ShapeCommand>,
    pub texts: Vec<TextCommand>,
    /// World view for sprites and shapes.
    pub view: Camera2D,
    /// RGB clear color.
    pub clear_color: [u8; 3],
}

impl RenderBuffer {
    pub fn new(view: Camera2D) -> Self {
        Self {
            instances: Vec::with_capacity(512),
            textures: Vec::new(),
            shapes: Vec::new(),
            texts: Vec::new(),
            view,
            clear_color: [0, 0, 0],
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.textures.clear();
        self.shapes.clear();
        self.texts.clear();
        self.clear_color = [0, 0, 0];
    }

    /// Intern a texture name and return its index.
    pub fn texture_index(&mut self, name: &str) -> usize {
        match self.textures.iter().position(|t| t == name) {
            Some(idx) => idx,
            None => {
                self.textures.push(name.to_string());
                self.textures.len() - 1
            }
        }
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn push_shape(&mut self, shape: ShapeCommand) {
        self.shapes.push(shape);
    }

    pub fn push_text(&mut self, text: TextCommand) {
        self.texts.push(text);
    }

    /// Stable-sort instances back-to-front by layer.
    pub fn finish(&mut self) {
        self.instances
            .sort_by(|a, b| a.layer.partial_cmp(&b.layer).unwrap_or(std::cmp::Ordering::Equal));
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes for a GPU upload.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Name of the texture an instance draws with.
    pub fn texture_of(&self, instance: &RenderInstance) -> Option<&str> {
        self.textures.get(instance.texture as usize).map(String::as_str)
    }
}
