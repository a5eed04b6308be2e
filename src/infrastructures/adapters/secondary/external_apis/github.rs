use crate::domain::external_apis::github::{FetchError, GitHubApi, RawRepository};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// GitHub rejects requests that carry no User-Agent.
const USER_AGENT: &str = "github-showcase-rust-app";

pub struct GitHubApiAdapter {
    client: Client,
    base_url: String,
}

impl GitHubApiAdapter {
    /// `timeout` bounds the whole request; a stalled API surfaces as
    /// `FetchError::Network`.
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubApiAdapter {
    #[tracing::instrument(name = "GitHubApiAdapter::fetch_user_repositories", skip(self))]
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RawRepository>, FetchError> {
        let url = format!("{}/users/{}/repos", self.base_url, username);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("API returned {} for {}", status, url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use std::net::SocketAddr;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    async fn serve(router: Router) -> std::io::Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(addr)
    }

    async fn fetch_from(router: Router) -> anyhow::Result<Result<Vec<RawRepository>, FetchError>> {
        let addr = serve(router).await?;
        let adapter = GitHubApiAdapter::new(format!("http://{addr}/"), TEST_TIMEOUT)?;
        Ok(adapter.fetch_user_repositories("someone").await)
    }

    #[tokio::test]
    async fn test_parses_repository_list() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/users/someone/repos",
            get(|| async {
                r#"[
                    {
                        "name": "a",
                        "html_url": "https://github.com/someone/a",
                        "description": null,
                        "homepage": "https://a.example",
                        "language": "Rust",
                        "forks_count": 1,
                        "stargazers_count": 5,
                        "watchers_count": 5,
                        "private": false
                    },
                    { "name": "b" }
                ]"#
            }),
        );

        let repositories = fetch_from(router).await??;

        assert_eq!(repositories.len(), 2);
        assert_eq!(repositories[0].name.as_deref(), Some("a"));
        assert_eq!(repositories[0].homepage.as_deref(), Some("https://a.example"));
        assert_eq!(repositories[0].description, None);
        assert_eq!(repositories[0].stargazers_count, Some(5));
        assert_eq!(repositories[1].html_url, None);
        assert_eq!(repositories[1].forks_count, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_array_is_ok() -> anyhow::Result<()> {
        let router = Router::new().route("/users/someone/repos", get(|| async { "[]" }));

        let repositories = fetch_from(router).await??;

        assert!(repositories.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_client_error_status_fails_regardless_of_body() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/users/someone/repos",
            get(|| async { (StatusCode::BAD_REQUEST, "[]") }),
        );

        let result = fetch_from(router).await?;

        assert!(matches!(result, Err(FetchError::Status(400))));
        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_status_fails() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/users/someone/repos",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
        );

        let result = fetch_from(router).await?;

        assert!(matches!(result, Err(FetchError::Status(500))));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_user_is_a_status_failure() -> anyhow::Result<()> {
        let result = fetch_from(Router::new()).await?;

        assert!(matches!(result, Err(FetchError::Status(404))));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_parse_failure() -> anyhow::Result<()> {
        let router =
            Router::new().route("/users/someone/repos", get(|| async { "<html>nope</html>" }));

        let result = fetch_from(router).await?;

        assert!(matches!(result, Err(FetchError::Parse(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_non_array_json_is_a_parse_failure() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/users/someone/repos",
            get(|| async { r#"{"message": "Not Found"}"# }),
        );

        let result = fetch_from(router).await?;

        assert!(matches!(result, Err(FetchError::Parse(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_failure() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let adapter = GitHubApiAdapter::new(format!("http://{addr}"), TEST_TIMEOUT)?;
        let result = adapter.fetch_user_repositories("someone").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_stalled_server_times_out_as_network_failure() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        // accepts and holds connections without ever answering
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let adapter = GitHubApiAdapter::new(format!("http://{addr}"), Duration::from_millis(200))?;
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            adapter.fetch_user_repositories("someone"),
        )
        .await?;

        assert!(matches!(result, Err(FetchError::Network(_))));
        server.abort();
        Ok(())
    }
}
