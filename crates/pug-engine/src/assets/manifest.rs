use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Asset manifest describing every texture, font, sprite record, animation
/// record, sound effect and music track a game uses.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
    /// Font name -> file path.
    #[serde(default)]
    pub fonts: HashMap<String, String>,
    /// Named sub-rectangles of textures.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    #[serde(default)]
    pub animations: HashMap<String, AnimationDescriptor>,
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
    /// Music name -> file path.
    #[serde(default)]
    pub music: HashMap<String, String>,
}

/// Describes a single texture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file.
    pub path: String,
    /// Pixel width, used for layout without decoding the image.
    pub width: u32,
    pub height: u32,
}

/// Describes a named region within a texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    pub texture: String,
    /// [left, top, width, height] in texture pixels.
    pub rect: [f32; 4],
}

/// Describes a horizontal-strip animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub texture: String,
    /// Rect of frame 0: [left, top, width, height].
    pub first_frame: [f32; 4],
    pub frame_count: usize,
    /// Seconds per frame.
    pub frame_duration: f32,
    #[serde(default = "default_repeat")]
    pub repeat: bool,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    pub path: String,
    /// Playback length in seconds, used to expire finished sounds.
    #[serde(default = "default_sound_duration")]
    pub duration: f32,
}

fn default_repeat() -> bool {
    true
}

fn default_sound_duration() -> f32 {
    1.0
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(EngineError::Manifest)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
