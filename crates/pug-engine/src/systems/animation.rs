//! Animation system: ticks animations and updates sprite frames.

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::core::entity_manager::EntityManager;

/// Tick every entity animation and point its sprite at the current frame.
///
/// Call this once per frame before rendering. Entities whose non-repeating
/// animation finished are left on the last frame.
pub fn tick_animations(entities: &mut EntityManager, dt: f32) {
    for entity in entities.iter_mut() {
        let Some(anim) = entity.get_mut::<Animation>() else {
            continue;
        };
        anim.tick(dt);
        let (texture, rect) = (anim.texture.clone(), anim.current_rect());

        if let Some(sprite) = entity.get_mut::<Sprite>() {
            sprite.texture = texture;
            sprite.rect = Some(rect);
        }
    }
}
