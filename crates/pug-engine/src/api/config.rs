use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Configuration for the engine and the game it hosts.
/// Every field has a default, so a config file only lists what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Target frames per second for realtime backends.
    pub framerate: u32,
    /// Multiplier on every frame delta handed to scenes.
    pub simulation_speed: f32,
    /// Path to the asset manifest, relative to the config file.
    pub assets: String,
    /// Music volume (0..=100).
    pub music_volume: f32,
    /// Sound effect volume (0..=100).
    pub sound_volume: f32,
    /// Levels offered by the menu, in order.
    pub levels: Vec<LevelEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// Menu label.
    pub name: String,
    /// Level file path.
    pub path: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 768,
            title: "Pug Grand Prix".to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            framerate: 60,
            simulation_speed: 1.0,
            assets: "assets/manifest.json".to_string(),
            music_volume: 5.0,
            sound_volume: 100.0,
            levels: vec![
                LevelEntry {
                    name: "Level 1".to_string(),
                    path: "levels/level1.txt".to_string(),
                },
                LevelEntry {
                    name: "Level 2".to_string(),
                    path: "levels/level2.txt".to_string(),
                },
                LevelEntry {
                    name: "Level 3".to_string(),
                    path: "levels/level3.txt".to_string(),
                },
            ],
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(EngineError::Config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Seconds per frame at the target framerate.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.framerate.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "window": { "width": 800 }, "simulation_speed": 2.0 }"#).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.simulation_speed, 2.0);
        assert_eq!(config.levels.len(), 3);
    }

    #[test]
    fn level_list_is_overridable() {
        let config = GameConfig::from_json(r#"{ "levels": [{ "name": "Beach", "path": "beach.txt" }] }"#).unwrap();
        assert_eq!(config.levels, vec![LevelEntry { name: "Beach".into(), path: "beach.txt".into() }]);
    }

    #[test]
    fn malformed_config_is_config_error() {
        assert!(matches!(GameConfig::from_json("[1, 2"), Err(EngineError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn frame_dt_from_framerate() {
        let config = GameConfig::default();
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < 1e-6);
    }
}
