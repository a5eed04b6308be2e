use super::project::{Tile, render_html};
use crate::application::use_cases::load_projects::{
    LoadProjectsUseCase, LoadProjectsUseCaseInput,
};
use crate::domain::models::repository::DisplayRepository;
use leptos::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectListState {
    Loading,
    Error,
    /// Highest score first.
    Ready(Vec<DisplayRepository>),
}

impl ProjectListState {
    /// `Error` and `Ready` are final for a mounted view.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Ready(_) => "ready",
        }
    }

    pub fn render(&self) -> String {
        match self.clone() {
            Self::Loading => render_html(view! { <LoadingIndicator /> }),
            Self::Error => render_html(view! { <ErrorPanel /> }),
            Self::Ready(repositories) => {
                render_html(view! { <ProjectList repositories=repositories /> })
            }
        }
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    view! { <div class="loading loading-projects"></div> }
}

#[component]
fn ErrorPanel() -> impl IntoView {
    view! {
        <div>
            <div id="projects-error-wrapper" class="wrapper-error-content">
                <div id="error-box" role="main" class="page-error-content">
                    <p>
                        <span>"There was an error retrieving the projects from GitHub, try again later."</span>
                        <br />
                        <span>"If the errors persist, I would appreciate if you contact me about it in the links in the footer."</span>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectList(repositories: Vec<DisplayRepository>) -> impl IntoView {
    view! {
        <div class="projects">
            {repositories
                .into_iter()
                .enumerate()
                .map(|(index, repository)| {
                    view! { <Tile repository=repository index=index /> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("project list is already mounted")]
    AlreadyMounted,
}

/// The project showcase: loads the repository list once when mounted and
/// renders whichever state it is in.
pub struct ProjectListView {
    state: watch::Sender<ProjectListState>,
    lifetime: CancellationToken,
    mounted: AtomicBool,
}

impl ProjectListView {
    /// `lifetime` is cancelled when the view is unmounted.
    pub fn new(lifetime: CancellationToken) -> Self {
        let (state, _) = watch::channel(ProjectListState::Loading);
        Self {
            state,
            lifetime,
            mounted: AtomicBool::new(false),
        }
    }

    /// Spawns the one load this view performs. Fails if the view was
    /// already mounted.
    pub fn mount<U>(
        self: &Arc<Self>,
        use_case: Arc<U>,
        input: LoadProjectsUseCaseInput,
    ) -> Result<JoinHandle<()>, MountError>
    where
        U: LoadProjectsUseCase + Send + Sync + 'static,
    {
        if self.mounted.swap(true, Ordering::AcqRel) {
            return Err(MountError::AlreadyMounted);
        }
        let view = Arc::clone(self);
        Ok(tokio::spawn(async move {
            view.load(use_case.as_ref(), input).await;
        }))
    }

    pub fn unmount(&self) {
        self.lifetime.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.lifetime.is_cancelled()
    }

    #[tracing::instrument(name = "ProjectListView::load", skip(self, use_case))]
    async fn load<U>(&self, use_case: &U, input: LoadProjectsUseCaseInput)
    where
        U: LoadProjectsUseCase + Send + Sync + ?Sized,
    {
        let result = tokio::select! {
            biased;
            () = self.lifetime.cancelled() => {
                tracing::debug!("View unmounted before projects were loaded");
                return;
            }
            result = use_case.execute(input) => result,
        };

        let next = match result {
            Ok(output) => {
                tracing::info!("Loaded {} projects", output.repositories.len());
                ProjectListState::Ready(output.repositories)
            }
            Err(e) => {
                tracing::error!("Failed to load projects: {}", e);
                ProjectListState::Error
            }
        };
        self.transition(next);
    }

    fn transition(&self, next: ProjectListState) -> bool {
        if !self.is_mounted() {
            tracing::debug!("Dropping {} state for an unmounted view", next.name());
            return false;
        }
        self.state.send_if_modified(|state| {
            if state.is_settled() {
                tracing::warn!("Ignoring {} state, view is already {}", next.name(), state.name());
                return false;
            }
            *state = next;
            true
        })
    }

    pub fn state(&self) -> ProjectListState {
        self.state.borrow().clone()
    }

    /// Waits for `Error` or `Ready`. Returns early with the current state if
    /// the view is unmounted first.
    pub async fn settled(&self) -> ProjectListState {
        let mut receiver = self.state.subscribe();
        loop {
            let state = receiver.borrow_and_update().clone();
            if state.is_settled() || !self.is_mounted() {
                return state;
            }
            tokio::select! {
                changed = receiver.changed() => {
                    if changed.is_err() {
                        return state;
                    }
                }
                () = self.lifetime.cancelled() => return state,
            }
        }
    }

    pub fn render(&self) -> String {
        self.state.borrow().render()
    }
}
