pub mod music;
pub mod sound;

pub use music::MusicPlayer;
pub use sound::SoundPlayer;
