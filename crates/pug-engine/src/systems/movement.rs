//! Movement system: integrates every transform by its velocity.

use crate::components::transform::Transform;
use crate::core::entity_manager::EntityManager;

/// Move every entity that has a [`Transform`] by `vel * dt`.
pub fn integrate_transforms(entities: &mut EntityManager, dt: f32) {
    for entity in entities.iter_mut() {
        if let Some(transform) = entity.get_mut::<Transform>() {
            transform.integrate(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn integrates_only_committed_transforms() {
        let mut em = EntityManager::new();
        let moving = em.add_entity("Barrel");
        moving.add(Transform::new(Vec2::ZERO).with_vel(Vec2::new(10.0, 0.0)));
        let moving = moving.id;
        em.update();

        let pending = em.add_entity("Barrel");
        pending.add(Transform::new(Vec2::ZERO).with_vel(Vec2::new(10.0, 0.0)));
        let pending = pending.id;

        integrate_transforms(&mut em, 0.5);

        assert_eq!(em.get(moving).unwrap().get::<Transform>().pos, Vec2::new(5.0, 0.0));
        assert_eq!(em.get(pending).unwrap().get::<Transform>().pos, Vec2::ZERO);
    }
}
