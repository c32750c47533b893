pub mod camera;
pub mod headless;
pub mod instance;
pub mod window;

pub use camera::Camera2D;
pub use headless::{HeadlessWindow, ScriptedKey};
pub use instance::{RenderBuffer, RenderInstance, ShapeCommand, TextCommand};
pub use window::Window;
