use crate::core::geometry::Rect;

/// Sprite component: which texture region an entity draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Texture name in the asset store.
    pub texture: String,
    /// Region of the texture to draw. `None` draws the whole texture.
    pub rect: Option<Rect>,
    /// Draw centered on the entity position (false = top-left anchored).
    pub centered: bool,
    /// Whether the sprite should be drawn at all.
    pub visible: bool,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl Sprite {
    /// A centered sprite drawing `rect` of `texture`.
    pub fn new(texture: impl Into<String>, rect: Rect) -> Self {
        Self {
            texture: texture.into(),
            rect: Some(rect),
            centered: true,
            visible: true,
            alpha: 1.0,
        }
    }

    /// A whole-texture sprite anchored by its top-left corner, as used for backgrounds.
    pub fn whole(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            rect: None,
            centered: false,
            visible: true,
            alpha: 1.0,
        }
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::whole(String::new())
    }
}
