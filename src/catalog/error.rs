//! Per-image import errors.
//!
//! These never abort a batch; they are counted and reported per file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file name is not valid UTF-8: `{0}`")]
    InvalidName(PathBuf),

    #[error("failed to remove existing imageset `{0}`")]
    RemoveExisting(PathBuf, #[source] std::io::Error),

    #[error("failed to create imageset directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to copy `{from}` to `{to}`")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{0}`")]
    WriteContents(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize Contents.json")]
    Serialize(#[from] serde_json::Error),
}

impl ImportError {
    /// One-line description including the underlying cause.
    pub fn detail(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }
}
