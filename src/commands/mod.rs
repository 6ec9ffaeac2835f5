pub mod delete;
pub mod list;
pub mod misc;
pub mod search;

pub use delete::delete_repo;
pub use list::{list_repos, show_repo};
pub use misc::{clear_results, generate_completions, show_config};
pub use search::search_repos;

use repofinder::{ConfirmationPrompt, FileStore, FinderConfig, GitHubFetcher, Result, SearchController};

pub type Session<'a> = SearchController<GitHubFetcher, FileStore, &'a dyn ConfirmationPrompt>;

/// Open the persisted session described by `config`.
pub fn open_session<'a>(config: &FinderConfig, prompt: &'a dyn ConfirmationPrompt) -> Result<Session<'a>> {
    let fetcher = GitHubFetcher::new(config)?;
    let store = FileStore::open(config.resolved_store_path()?)?;
    tracing::debug!("Using store {}", store.path().display());
    Ok(SearchController::new(fetcher, store, prompt))
}
