//! Error types for repofinder.
//!
//! User-visible search failures (bad term, no results, unreachable API) are
//! not errors at this level: the controller folds them into its state. The
//! `Error` enum covers what a caller of a fallible API has to handle.
//! Term validation has its own [`crate::validator::InvalidTermError`].

use thiserror::Error;

/// Result type alias for repofinder operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository {0} is not in the current results")]
    NotInResults(u64),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
