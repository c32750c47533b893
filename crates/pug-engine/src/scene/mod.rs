pub mod action;
pub mod scene;

pub use action::{ActionKind, ActionMap, Command};
pub use scene::{Scene, SceneBase, SceneLifecycle};
