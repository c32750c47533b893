pub mod animation;
pub mod bounding_box;
pub mod entity;
pub mod input;
pub mod layer;
pub mod sprite;
pub mod state;
pub mod transform;

pub use animation::Animation;
pub use bounding_box::BoundingBox;
pub use entity::{Component, Entity};
pub use input::Input;
pub use layer::RenderLayer;
pub use sprite::Sprite;
pub use state::State;
pub use transform::Transform;
