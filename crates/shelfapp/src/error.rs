use crate::model::BookId;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("{0}")]
    Validation(String),

    #[error("Book #{0} not found")]
    NotFound(BookId),

    #[error("Corrupt data in {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Store is locked by another shelf process (remove {} if no other process is running)",
        .0.display()
    )]
    Locked(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShelfError {
    pub fn validation(message: impl Into<String>) -> Self {
        ShelfError::Validation(message.into())
    }

    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        ShelfError::CorruptData {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ShelfError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit code for this error kind. `0` is never returned.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShelfError::Config(_) => 1,
            ShelfError::Validation(_) => 2,
            ShelfError::NotFound(_) => 3,
            ShelfError::CorruptData { .. } => 4,
            ShelfError::Io { .. } => 5,
            ShelfError::Locked(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
