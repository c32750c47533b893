pub mod blocking;
pub mod error;
pub mod level;
pub mod menu;
pub mod race;
pub mod splash;
pub mod track;

pub use error::LevelError;
pub use level::{Background, Level};
pub use menu::MenuScene;
pub use race::{RaceResult, RaceScene};
pub use splash::SplashScene;
pub use track::TrackLayout;
