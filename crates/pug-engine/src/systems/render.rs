use glam::Vec2;

use crate::assets::registry::Assets;
use crate::components::bounding_box::BoundingBox;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::core::geometry::Rect;
use crate::renderer::instance::{RenderBuffer, RenderInstance, ShapeCommand};

/// Debug switches for [`build_render_buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw sprites.
    pub textures: bool,
    /// Outline bounding boxes.
    pub collision: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            textures: true,
            collision: false,
        }
    }
}

pub const COLLISION_OUTLINE: [u8; 4] = [0, 255, 0, 255];

/// Append sprites (and optionally bounding boxes) for `entities` to `buffer`.
/// Entities need a [`Transform`] to be drawn. Call [`RenderBuffer::finish`]
/// afterwards to get layer order.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    assets: &Assets,
    buffer: &mut RenderBuffer,
    options: RenderOptions,
) {
    for entity in entities {
        if !entity.is_alive() {
            continue;
        }
        let Some(transform) = entity.try_get::<Transform>() else {
            continue;
        };

        if options.textures {
            if let Some(sprite) = entity.try_get::<Sprite>() {
                if sprite.visible {
                    push_sprite(buffer, assets, sprite, transform, entity.layer);
                }
            }
        }

        if options.collision {
            if let Some(bbox) = entity.try_get::<BoundingBox>() {
                buffer.push_shape(ShapeCommand {
                    rect: Rect::from_center(transform.pos, bbox.size),
                    color: COLLISION_OUTLINE,
                    filled: false,
                    layer: RenderLayer::Debug,
                });
            }
        }
    }
}

fn push_sprite(buffer: &mut RenderBuffer, assets: &Assets, sprite: &Sprite, transform: &Transform, layer: RenderLayer) {
    let (src, size) = match sprite.rect {
        Some(rect) => (rect, rect.size()),
        None => {
            let (w, h) = assets.texture_size(&sprite.texture).unwrap_or((0, 0));
            (Rect::default(), Vec2::new(w as f32, h as f32))
        }
    };
    let top_left = if sprite.centered {
        transform.pos - size / 2.0
    } else {
        transform.pos
    };
    let texture = buffer.texture_index(&sprite.texture) as f32;

    buffer.push(RenderInstance {
        x: top_left.x,
        y: top_left.y,
        width: size.x,
        height: size.y,
        rotation: transform.angle,
        alpha: sprite.alpha,
        texture,
        src_x: src.left,
        src_y: src.top,
        src_w: src.width,
        src_h: src.height,
        layer: layer.as_u8() as f32,
    });
}
