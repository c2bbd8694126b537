//! Error types.
//!
//! Running out of coins is not an error: draws are always affordable through
//! bankruptcy protection. Errors only come from configuration and the save
//! file boundary. A missing save file is not an error either; see
//! [`SaveStore::load`](crate::persistence::SaveStore::load).

use thiserror::Error;

/// Result type for fallible core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Save file exists but its header is malformed.
    #[error("save file corrupted: {reason}")]
    Corrupted { reason: String },

    /// Filesystem failure while reading or writing the save file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected balance or name pool.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn corrupted(reason: impl Into<String>) -> Self {
        Error::Corrupted {
            reason: reason.into(),
        }
    }

    /// True for malformed save content, as opposed to I/O or config failures.
    #[must_use]
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Error::Corrupted { .. })
    }
}
