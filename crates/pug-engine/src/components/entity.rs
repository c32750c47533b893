use crate::api::types::EntityId;
use crate::components::animation::Animation;
use crate::components::bounding_box::BoundingBox;
use crate::components::input::Input;
use crate::components::layer::RenderLayer;
use crate::components::sprite::Sprite;
use crate::components::state::State;
use crate::components::transform::Transform;

/// Fat Entity: a single struct with one optional slot per component type.
/// A component is either `Some` (fully built) or `None`; there is no half-built state.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier, assigned by the entity manager.
    pub id: EntityId,
    /// Category string ("player", "Barrel", "Bone", "bkg", ...).
    pub tag: String,
    /// Draw order bucket.
    pub layer: RenderLayer,
    alive: bool,
    transform: Option<Transform>,
    sprite: Option<Sprite>,
    bounding_box: Option<BoundingBox>,
    input: Option<Input>,
    state: Option<State>,
    animation: Option<Animation>,
}

/// A component type stored in its own slot on [`Entity`].
pub trait Component: Sized + 'static {
    /// Human-readable name used in precondition panics.
    const NAME: &'static str;

    fn slot(entity: &Entity) -> &Option<Self>;
    fn slot_mut(entity: &mut Entity) -> &mut Option<Self>;
}

macro_rules! component_slot {
    ($ty:ty, $field:ident) => {
        impl Component for $ty {
            const NAME: &'static str = stringify!($ty);

            fn slot(entity: &Entity) -> &Option<Self> {
                &entity.$field
            }

            fn slot_mut(entity: &mut Entity) -> &mut Option<Self> {
                &mut entity.$field
            }
        }
    };
}

component_slot!(Transform, transform);
component_slot!(Sprite, sprite);
component_slot!(BoundingBox, bounding_box);
component_slot!(Input, input);
component_slot!(State, state);
component_slot!(Animation, animation);

impl Entity {
    pub(crate) fn new(id: EntityId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            layer: RenderLayer::default(),
            alive: true,
            transform: None,
            sprite: None,
            bounding_box: None,
            input: None,
            state: None,
            animation: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flag the entity for removal. Storage is only touched at the next
    /// `EntityManager::update`.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Construct (or reset) a component and return it.
    pub fn add<T: Component>(&mut self, component: T) -> &mut T {
        T::slot_mut(self).insert(component)
    }

    pub fn has<T: Component>(&self) -> bool {
        T::slot(self).is_some()
    }

    /// Shared access to a component the caller knows is present.
    ///
    /// # Panics
    /// If the entity has no `T`. Guard with [`Entity::has`] or use
    /// [`Entity::try_get`] when absence is possible.
    pub fn get<T: Component>(&self) -> &T {
        match T::slot(self) {
            Some(component) => component,
            None => panic!("entity {} ({}) has no {} component", self.id, self.tag, T::NAME),
        }
    }

    /// Mutable access to a component the caller knows is present.
    ///
    /// # Panics
    /// If the entity has no `T`.
    pub fn component_mut<T: Component>(&mut self) -> &mut T {
        let id = self.id;
        match T::slot_mut(self) {
            Some(component) => component,
            None => panic!("entity {} has no {} component", id, T::NAME),
        }
    }

    pub fn try_get<T: Component>(&self) -> Option<&T> {
        T::slot(self).as_ref()
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        T::slot_mut(self).as_mut()
    }

    pub fn remove<T: Component>(&mut self) -> Option<T> {
        T::slot_mut(self).take()
    }

    // -- Builder pattern --

    pub fn with<T: Component>(mut self, component: T) -> Self {
        self.add(component);
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }
}
