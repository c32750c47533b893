//! Level files.
//!
//! A level is a stream of whitespace separated tokens, read token by token
//! rather than line by line:
//!
//! ```text
//! Bkg <texture> <x> <y>     background sprite, top-left at (x, y); repeatable
//! World <width> <height>    world bounds
//! PlayerSpeed <speed>       base player speed in units per second
//! ```
//!
//! Unknown tokens are skipped.

use std::path::Path;
use std::str::FromStr;

use glam::Vec2;

use crate::error::LevelError;

pub const DEFAULT_PLAYER_SPEED: f32 = 200.0;
pub const DEFAULT_WORLD: Vec2 = Vec2::new(1280.0, 768.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub texture: String,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub backgrounds: Vec<Background>,
    pub world: Vec2,
    pub player_speed: f32,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            backgrounds: Vec::new(),
            world: DEFAULT_WORLD,
            player_speed: DEFAULT_PLAYER_SPEED,
        }
    }
}

impl Level {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::parse(&text)?;
        log::info!(
            "loaded level {} ({} backgrounds, world {}x{})",
            path.display(),
            level.backgrounds.len(),
            level.world.x,
            level.world.y
        );
        Ok(level)
    }

    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut level = Self::default();
        let mut tokens = text.split_whitespace();

        while let Some(token) = tokens.next() {
            match token {
                "Bkg" => {
                    let texture = next_token(&mut tokens, "Bkg")?.to_string();
                    let x = next_value(&mut tokens, "Bkg")?;
                    let y = next_value(&mut tokens, "Bkg")?;
                    level.backgrounds.push(Background {
                        texture,
                        pos: Vec2::new(x, y),
                    });
                }
                "World" => {
                    let width = next_value(&mut tokens, "World")?;
                    let height = next_value(&mut tokens, "World")?;
                    level.world = Vec2::new(width, height);
                }
                "PlayerSpeed" => {
                    level.player_speed = next_value(&mut tokens, "PlayerSpeed")?;
                }
                other => log::debug!("skipping unknown level token '{}'", other),
            }
        }
        Ok(level)
    }
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    directive: &'static str,
) -> Result<&'a str, LevelError> {
    tokens.next().ok_or(LevelError::MissingValue { directive })
}

fn next_value<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    directive: &'static str,
) -> Result<T, LevelError> {
    let raw = next_token(tokens, directive)?;
    raw.parse().map_err(|_| LevelError::InvalidValue {
        directive,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_directives() {
        let level = Level::parse(
            "Bkg Track1 0 0\nBkg Clouds 0 -768\n World 1280 3072\nPlayerSpeed 250.5\n",
        )
        .unwrap();
        assert_eq!(level.backgrounds.len(), 2);
        assert_eq!(level.backgrounds[1].texture, "Clouds");
        assert_eq!(level.backgrounds[1].pos, Vec2::new(0.0, -768.0));
        assert_eq!(level.world, Vec2::new(1280.0, 3072.0));
        assert_eq!(level.player_speed, 250.5);
    }

    #[test]
    fn tokens_may_span_lines() {
        let level = Level::parse("World\n640\n\n480").unwrap();
        assert_eq!(level.world, Vec2::new(640.0, 480.0));
    }

    #[test]
    fn unknown_tokens_are_skipped() {
        let level = Level::parse("Music gameTheme PlayerSpeed 120").unwrap();
        assert_eq!(level.player_speed, 120.0);
        assert!(level.backgrounds.is_empty());
        assert_eq!(level.world, DEFAULT_WORLD);
    }

    #[test]
    fn truncated_directive_is_missing_value() {
        let err = Level::parse("World 100").unwrap_err();
        assert!(matches!(err, LevelError::MissingValue { directive: "World" }));
    }

    #[test]
    fn bad_number_is_invalid_value() {
        let err = Level::parse("PlayerSpeed fast").unwrap_err();
        match err {
            LevelError::InvalidValue { directive, value } => {
                assert_eq!(directive, "PlayerSpeed");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = Level::load("no/such/level.txt").unwrap_err();
        assert!(matches!(err, LevelError::Open { .. }));
        assert!(err.to_string().contains("no/such/level.txt"));
    }
}
