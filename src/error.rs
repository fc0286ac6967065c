//! Error kinds surfaced by a sync run.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a sync run. None of these are retried.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A required environment variable is absent or empty
    #[error("Missing credential: {0} must be set")]
    MissingCredential(String),

    /// Non-200 status, network/timeout error or unexpected response shape
    #[error("Failed to lookup top track: {0}")]
    LookupFailure(String),

    /// The site config could not be located, read or decoded
    #[error("Failed to read config {}: {reason}", .path.display())]
    ConfigReadFailure { path: PathBuf, reason: String },

    /// The site config could not be serialized or written back
    #[error("Failed to write config {}: {reason}", .path.display())]
    ConfigWriteFailure { path: PathBuf, reason: String },
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::LookupFailure(format!("request timed out: {}", err))
        } else {
            SyncError::LookupFailure(err.to_string())
        }
    }
}
