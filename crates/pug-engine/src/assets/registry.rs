use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::assets::manifest::AssetManifest;
use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::core::geometry::Rect;
use crate::error::{EngineError, Result};

/// Keyed asset store built from an [`AssetManifest`].
///
/// Lookups by name return `None` for unknown names; callers fall back to
/// whatever makes sense (usually an invisible or whole-texture sprite).
#[derive(Debug, Clone, Default)]
pub struct Assets {
    manifest: AssetManifest,
    root: PathBuf,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose relative paths resolve against `root`.
    pub fn from_manifest(manifest: AssetManifest, root: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            root: root.into(),
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.manifest.textures.contains_key(name)
    }

    /// Pixel size of a texture, if known.
    pub fn texture_size(&self, name: &str) -> Option<(u32, u32)> {
        self.manifest.textures.get(name).map(|t| (t.width, t.height))
    }

    pub fn font_path(&self, name: &str) -> Option<PathBuf> {
        self.manifest.fonts.get(name).map(|p| self.root.join(p))
    }

    /// A centered sprite for a named sprite record.
    pub fn sprite(&self, name: &str) -> Option<Sprite> {
        self.manifest.sprites.get(name).map(|desc| {
            let [left, top, width, height] = desc.rect;
            Sprite::new(desc.texture.clone(), Rect::new(left, top, width, height))
        })
    }

    /// A fresh animation for a named animation record.
    pub fn animation(&self, name: &str) -> Option<Animation> {
        self.manifest.animations.get(name).map(|desc| {
            let [left, top, width, height] = desc.first_frame;
            Animation::new(
                name,
                desc.texture.clone(),
                Rect::new(left, top, width, height),
                desc.frame_count,
                desc.frame_duration,
                desc.repeat,
            )
        })
    }

    /// Playback length of a sound effect; unknown sounds last one second.
    pub fn sound_duration(&self, name: &str) -> f32 {
        self.manifest.sounds.get(name).map(|s| s.duration).unwrap_or(1.0)
    }

    pub fn has_music(&self, name: &str) -> bool {
        self.manifest.music.contains_key(name)
    }

    /// Decode a texture's pixels, e.g. to sample a level background.
    pub fn load_image(&self, texture: &str) -> Result<RgbaImage> {
        let desc = self
            .manifest
            .textures
            .get(texture)
            .ok_or_else(|| EngineError::UnknownTexture(texture.to_string()))?;
        load_rgba(self.root.join(&desc.path))
    }
}

/// Decode any supported image file into RGBA8 pixels.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| EngineError::Image {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Assets {
        let json = r#"{
            "textures": { "pug": { "path": "pug.png", "width": 128, "height": 64 } },
            "sprites": { "playerPug": { "texture": "pug", "rect": [0, 0, 35, 33] } },
            "animations": {
                "run": { "texture": "pug", "first_frame": [0, 33, 35, 33], "frame_count": 4, "frame_duration": 0.1, "repeat": false }
            },
            "sounds": { "bark": { "path": "bark.wav", "duration": 0.5 } }
        }"#;
        Assets::from_manifest(AssetManifest::from_json(json).unwrap(), "assets")
    }

    #[test]
    fn sprite_lookup_builds_centered_sprite() {
        let sprite = store().sprite("playerPug").expect("sprite should exist");
        assert_eq!(sprite.texture, "pug");
        assert_eq!(sprite.rect, Some(Rect::new(0.0, 0.0, 35.0, 33.0)));
        assert!(sprite.centered);
    }

    #[test]
    fn animation_lookup_copies_record() {
        let anim = store().animation("run").expect("animation should exist");
        assert_eq!(anim.frame_count, 4);
        assert!(!anim.repeat);
        assert_eq!(anim.frame_index, 0);
    }

    #[test]
    fn unknown_names_return_none() {
        let assets = store();
        assert!(assets.sprite("nope").is_none());
        assert!(assets.animation("nope").is_none());
        assert_eq!(assets.sound_duration("nope"), 1.0);
        assert_eq!(assets.sound_duration("bark"), 0.5);
    }

    #[test]
    fn load_image_of_unknown_texture_fails() {
        let err = store().load_image("missing").unwrap_err();
        assert!(matches!(err, EngineError::UnknownTexture(name) if name == "missing"));
    }

    #[test]
    fn load_image_of_missing_file_is_image_error() {
        let err = store().load_image("pug").unwrap_err();
        assert!(matches!(err, EngineError::Image { .. }));
    }
}
