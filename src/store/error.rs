//! Store error types.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding store contents for persistence failed
    #[error("Encoding preferences failed: {0}")]
    Encode(#[from] serde_json::Error),
}
