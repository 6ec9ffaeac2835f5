use crate::config::FinderConfig;
use crate::error::{Error, Result};
use crate::types::SearchResponse;
use std::time::Duration;

/// Runs a keyword search against the hosting API.
pub trait SearchFetcher {
    fn search(&self, term: &str) -> Result<SearchResponse>;
}

impl<F: SearchFetcher + ?Sized> SearchFetcher for &F {
    fn search(&self, term: &str) -> Result<SearchResponse> {
        (**self).search(term)
    }
}

pub struct GitHubFetcher {
    client: reqwest::blocking::Client,
    api_base_url: String,
}

impl GitHubFetcher {
    pub fn new(config: &FinderConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, term: &str) -> String {
        format!(
            "{}/search/repositories?q={}",
            self.api_base_url,
            urlencoding::encode(term)
        )
    }
}

impl SearchFetcher for GitHubFetcher {
    fn search(&self, term: &str) -> Result<SearchResponse> {
        let url = self.search_url(term);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("GitHub API error: {}", status)));
        }

        let body = resp.text()?;
        decode_response(&body)
    }
}

pub fn decode_response(body: &str) -> Result<SearchResponse> {
    Ok(serde_json::from_str(body)?)
}
