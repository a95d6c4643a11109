use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetgenError {
    #[error("Preset description file not found at: {path}")]
    PresetsNotFound { path: PathBuf },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Environment variable '{0}' is not set")]
    MissingEnv(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PresetgenError>;
