use crate::domain::external_apis::github::{FetchError, GitHubApi};
use crate::domain::mappers::repository::map_repositories;
use crate::domain::models::repository::DisplayRepository;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LoadProjectsUseCaseInput {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct LoadProjectsUseCaseOutput {
    /// Highest score first.
    pub repositories: Vec<DisplayRepository>,
}

#[async_trait]
pub trait LoadProjectsUseCase {
    async fn execute(
        &self,
        input: LoadProjectsUseCaseInput,
    ) -> Result<LoadProjectsUseCaseOutput, FetchError>;
}

pub struct LoadProjectsInteractor<G: GitHubApi + Send + Sync + 'static> {
    github_api: Arc<G>,
}

impl<G: GitHubApi + Send + Sync + 'static> LoadProjectsInteractor<G> {
    pub fn new(github_api: Arc<G>) -> Self {
        Self { github_api }
    }
}

#[async_trait]
impl<G: GitHubApi + Send + Sync + 'static> LoadProjectsUseCase for LoadProjectsInteractor<G> {
    #[tracing::instrument(name = "LoadProjectsInteractor::execute", skip(self))]
    async fn execute(
        &self,
        input: LoadProjectsUseCaseInput,
    ) -> Result<LoadProjectsUseCaseOutput, FetchError> {
        tracing::info!("Fetching repositories for {}...", input.username);
        let raw_repositories = self
            .github_api
            .fetch_user_repositories(&input.username)
            .await?;
        tracing::info!("Fetched {} repositories", raw_repositories.len());

        let mut repositories = map_repositories(raw_repositories);
        // stable, so equal scores keep API order
        repositories.sort_by_key(|repository| Reverse(repository.score()));

        Ok(LoadProjectsUseCaseOutput { repositories })
    }
}
