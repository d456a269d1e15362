use std::io;

use thiserror::Error;

/// Failure loading or saving the persisted command history.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("history file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("history file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
