use std::collections::{HashMap, HashSet};

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Owns every entity of a scene and stages structural changes.
///
/// New entities wait in a pending buffer and destroyed entities stay in place
/// until [`EntityManager::update`], so systems can add and destroy freely while
/// iterating. Flat `Vec` storage; sized for hundreds of entities, not millions.
#[derive(Debug, Default)]
pub struct EntityManager {
    entities: Vec<Entity>,
    to_add: Vec<Entity>,
    by_tag: HashMap<String, Vec<EntityId>>,
    slots: HashMap<EntityId, usize>,
    next_id: u32,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new entity. It is reachable through [`get_mut`](Self::get_mut)
    /// right away but invisible to queries until the next `update`.
    pub fn add_entity(&mut self, tag: impl Into<String>) -> &mut Entity {
        self.next_id += 1;
        let entity = Entity::new(EntityId(self.next_id), tag);
        self.to_add.push(entity);
        let last = self.to_add.len() - 1;
        &mut self.to_add[last]
    }

    /// Commit pending additions, then sweep destroyed entities.
    pub fn update(&mut self) {
        for entity in self.to_add.drain(..) {
            self.by_tag.entry(entity.tag.clone()).or_default().push(entity.id);
            self.entities.push(entity);
        }

        let before = self.entities.len();
        self.entities.retain(|e| e.is_alive());
        if self.entities.len() != before {
            log::trace!("swept {} destroyed entities", before - self.entities.len());
            let alive: HashSet<EntityId> = self.entities.iter().map(|e| e.id).collect();
            for ids in self.by_tag.values_mut() {
                ids.retain(|id| alive.contains(id));
            }
            self.by_tag.retain(|_, ids| !ids.is_empty());
        }

        self.slots = self
            .entities
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id, idx))
            .collect();
    }

    /// All committed entities in insertion order (including ones flagged
    /// destroyed this frame).
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Ids of all committed entities, in insertion order.
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|e| e.id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Ids of committed entities with `tag`, in insertion order.
    pub fn ids_by_tag(&self, tag: &str) -> &[EntityId] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Committed entities with `tag`, in insertion order.
    pub fn entities_by_tag<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.ids_by_tag(tag).iter().filter_map(move |id| self.get(*id))
    }

    /// Look an entity up by id: committed first, then pending.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        match self.slots.get(&id) {
            Some(&idx) => self.entities.get(idx),
            None => self.to_add.iter().find(|e| e.id == id),
        }
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        match self.slots.get(&id) {
            Some(&idx) => self.entities.get_mut(idx),
            None => self.to_add.iter_mut().find(|e| e.id == id),
        }
    }

    /// Flag an entity for removal at the next `update`. Returns false if unknown.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.get_mut(id) {
            Some(entity) => {
                entity.destroy();
                true
            }
            None => false,
        }
    }

    /// Number of committed entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities waiting for the next `update`.
    pub fn pending(&self) -> usize {
        self.to_add.len()
    }

    /// Drop every entity, committed and pending. Ids keep counting up.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.to_add.clear();
        self.by_tag.clear();
        self.slots.clear();
    }
}
