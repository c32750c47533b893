/// Unique identifier for an entity owned by an [`EntityManager`](crate::core::entity_manager::EntityManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A one-shot sound request emitted by game logic.
/// The window backend drains these each frame and plays them.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundEvent {
    /// Asset name of the sound effect.
    pub name: String,
    /// Optional world position for positional playback.
    pub position: Option<glam::Vec2>,
    /// Volume in the range 0..=100.
    pub volume: f32,
}

/// A music request emitted by game logic.
#[derive(Debug, Clone, PartialEq)]
pub enum MusicEvent {
    Play { name: String, volume: f32 },
    Stop,
    SetVolume(f32),
}
