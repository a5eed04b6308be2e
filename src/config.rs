use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ANCHOR_ID: &str = "projects";
const DEFAULT_GITHUB_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Owner of the repositories shown in the showcase.
    pub github_username: String,
    pub github_api_base_url: String,
    /// Upper bound on the whole repository request, body included.
    pub github_request_timeout: Duration,
    pub listen_addr: SocketAddr,
    /// Id of the host page element the embed script mounts into.
    pub anchor_id: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_username = lookup("GITHUB_USERNAME")
            .filter(|value| !value.trim().is_empty())
            .context("Failed to read GITHUB_USERNAME")?;

        let github_api_base_url = lookup("GITHUB_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE_URL.to_string());

        let github_request_timeout = match lookup("GITHUB_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| format!("Invalid GITHUB_TIMEOUT_SECS: {value}"))?,
            None => DEFAULT_GITHUB_TIMEOUT_SECS,
        };
        let github_request_timeout = Duration::from_secs(github_request_timeout);

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .with_context(|| format!("Invalid LISTEN_ADDR: {listen_addr}"))?;

        let anchor_id = lookup("SHOWCASE_ANCHOR_ID").unwrap_or_else(|| DEFAULT_ANCHOR_ID.to_string());
        if anchor_id.is_empty()
            || !anchor_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!("Invalid SHOWCASE_ANCHOR_ID: {anchor_id}");
        }

        Ok(Self {
            github_username: github_username.trim().to_string(),
            github_api_base_url,
            github_request_timeout,
            listen_addr,
            anchor_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = config_from(&[("GITHUB_USERNAME", "someone")])?;

        assert_eq!(config.github_username, "someone");
        assert_eq!(config.github_api_base_url, "https://api.github.com");
        assert_eq!(config.github_request_timeout, Duration::from_secs(30));
        assert_eq!(config.listen_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.anchor_id, "projects");
        Ok(())
    }

    #[test]
    fn test_overrides() -> anyhow::Result<()> {
        let config = config_from(&[
            ("GITHUB_USERNAME", "someone"),
            ("GITHUB_API_BASE_URL", "http://localhost:9000"),
            ("GITHUB_TIMEOUT_SECS", "5"),
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("SHOWCASE_ANCHOR_ID", "my_projects"),
        ])?;

        assert_eq!(config.github_api_base_url, "http://localhost:9000");
        assert_eq!(config.github_request_timeout, Duration::from_secs(5));
        assert_eq!(config.listen_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.anchor_id, "my_projects");
        Ok(())
    }

    #[test]
    fn test_username_is_required() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("GITHUB_USERNAME", "  ")]).is_err());
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(config_from(&[("GITHUB_USERNAME", "someone"), ("GITHUB_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("GITHUB_USERNAME", "someone"), ("GITHUB_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_rejects_bad_listen_addr() {
        assert!(config_from(&[("GITHUB_USERNAME", "someone"), ("LISTEN_ADDR", "nowhere")]).is_err());
    }

    #[test]
    fn test_rejects_anchor_that_is_not_an_identifier() {
        assert!(
            config_from(&[
                ("GITHUB_USERNAME", "someone"),
                ("SHOWCASE_ANCHOR_ID", "x'); alert(1); ('"),
            ])
            .is_err()
        );
    }
}
