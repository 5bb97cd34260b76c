use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadalongError {
    #[error("Audio output error: {0}")]
    AudioOutput(String),

    #[error("Audio decode error: {0}")]
    AudioDecode(String),

    #[error("Audio file not found: {0}")]
    AudioFileNotFound(PathBuf),

    #[error("Alignment error: {0}")]
    Alignment(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReadalongError>;
