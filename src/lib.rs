//! Search public GitHub repositories by keyword, rank them by watchers, and
//! keep the working list between runs.
//!
//! [`SearchController`] is the entry point. It is generic over its three
//! collaborators so tests can swap in fakes:
//!
//! - [`SearchFetcher`]: runs the query ([`GitHubFetcher`] in production)
//! - [`PersistenceStore`]: holds the result set ([`FileStore`], [`MemoryStore`])
//! - [`ConfirmationPrompt`]: asks before a delete ([`StdinPrompt`], [`AssumeYes`])

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod fetch;
pub mod prompt;
pub mod store;
pub mod types;
pub mod validator;

pub use config::FinderConfig;
pub use controller::{ErrorKind, SearchController, SearchError, SearchState, SearchTicket, Status};
pub use error::{Error, Result};
pub use fetch::{GitHubFetcher, SearchFetcher};
pub use prompt::{AssumeYes, ConfirmationPrompt, StdinPrompt};
pub use store::{FileStore, MemoryStore, PersistenceStore, RESULTS_KEY};
pub use types::{Owner, Repository, SearchResponse};
pub use validator::{validate, InvalidTermError, ValidTerm};
