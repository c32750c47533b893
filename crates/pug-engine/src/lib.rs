pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod audio;
pub mod scene;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::{GameConfig, LevelEntry, WindowConfig};
pub use api::engine::{EngineContext, GameEngine, RenderContext, Transition};
pub use api::types::{EntityId, MusicEvent, SoundEvent};
pub use assets::{load_rgba, AssetManifest, Assets};
pub use audio::{MusicPlayer, SoundPlayer};
pub use components::{Animation, BoundingBox, Component, Entity, Input, RenderLayer, Sprite, State, Transform};
pub use core::entity_manager::EntityManager;
pub use core::geometry::Rect;
pub use core::time::{FrameClock, FrameStats};
pub use error::{EngineError, Result};
pub use input::queue::{InputEvent, InputQueue, KeyCode};
pub use renderer::{Camera2D, HeadlessWindow, RenderBuffer, RenderInstance, ScriptedKey, ShapeCommand, TextCommand, Window};
pub use scene::{ActionKind, ActionMap, Command, Scene, SceneBase, SceneLifecycle};
pub use systems::animation::tick_animations;
pub use systems::collision::{push_apart, resolve_static};
pub use systems::movement::integrate_transforms;
pub use systems::render::{build_render_buffer, RenderOptions};
