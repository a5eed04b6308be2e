use crate::domain::external_apis::github::RawRepository;

/// A repository prepared for display, ranked by `score`.
///
/// Fields are read-only; `score` is always `stargazers + forks` as computed
/// when the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRepository {
    name: String,
    url: String,
    description: Option<String>,
    homepage: Option<String>,
    language: Option<String>,
    forks: u64,
    stargazers: u64,
    watchers: u64,
    score: u64,
}

impl DisplayRepository {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn forks(&self) -> u64 {
        self.forks
    }

    pub fn stargazers(&self) -> u64 {
        self.stargazers
    }

    pub fn watchers(&self) -> u64 {
        self.watchers
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}

impl From<RawRepository> for DisplayRepository {
    fn from(raw: RawRepository) -> Self {
        let forks = raw.forks_count.unwrap_or_default();
        let stargazers = raw.stargazers_count.unwrap_or_default();
        Self {
            name: raw.name.unwrap_or_default(),
            url: raw.html_url.unwrap_or_default(),
            description: raw.description,
            homepage: raw.homepage,
            language: raw.language,
            forks,
            stargazers,
            watchers: raw.watchers_count.unwrap_or_default(),
            score: stargazers.saturating_add(forks),
        }
    }
}
