//! Error types for Spendwise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("Incompatible artifact: {0}")]
    IncompatibleArtifact(String),

    #[error("Artifact store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;
