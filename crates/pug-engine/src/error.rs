use std::path::PathBuf;

/// Errors raised while bringing the engine up: configuration, assets and scenes.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid game config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid asset manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unknown texture '{0}'")]
    UnknownTexture(String),

    #[error("no scene registered under '{0}'")]
    UnknownScene(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
