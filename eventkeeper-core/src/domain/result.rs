//! Result and error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backup directory exists but could not be read.
    #[error("Failed to scan backup directory {}: {source}", path.display())]
    BackupScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn backup_scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::BackupScan {
            path: path.into(),
            source,
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
