use std::path::PathBuf;

/// Errors raised while loading a level file.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to open level {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("level directive '{directive}' is missing a value")]
    MissingValue { directive: &'static str },

    #[error("level directive '{directive}' has invalid value '{value}'")]
    InvalidValue { directive: &'static str, value: String },
}
