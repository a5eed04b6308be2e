use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// A repository exactly as the `/users/{username}/repos` endpoint returns it.
///
/// Every field is optional so a record with missing fields still maps to a
/// display record instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRepository {
    pub name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub forks_count: Option<u64>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request could not complete: {0}")]
    Network(String),
    #[error("API responded with status {0}")]
    Status(u16),
    #[error("response body is not a repository list: {0}")]
    Parse(String),
}

#[async_trait]
pub trait GitHubApi {
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RawRepository>, FetchError>;
}
