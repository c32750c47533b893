pub mod entity_manager;
pub mod geometry;
pub mod time;
