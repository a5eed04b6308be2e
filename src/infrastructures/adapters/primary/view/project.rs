use super::language::LanguageBadge;
use crate::domain::models::repository::DisplayRepository;
use leptos::prelude::*;

const TILES_PER_ROW: usize = 3;

/// Server-renders a view to an HTML string.
pub fn render_html(view: impl IntoView + 'static) -> String {
    Owner::new().with(move || view.to_html())
}

pub fn is_last_in_row(index: usize) -> bool {
    index % TILES_PER_ROW == TILES_PER_ROW - 1
}

/// Repository name linking to its GitHub page.
#[component]
pub fn Header(name: String, url: String) -> impl IntoView {
    view! {
        <div class="project-item header-link">
            <h5>
                <a href=url target="_blank" rel="noopener noreferrer">{name}</a>
            </h5>
        </div>
    }
}

/// Stars, forks, language badge and description.
#[component]
pub fn StatsBlock(repository: DisplayRepository) -> impl IntoView {
    let badge_class = format!(
        "language {}",
        LanguageBadge::for_language(repository.language()).class()
    );
    let language = repository.language().unwrap_or_default().to_string();
    let description = repository.description().unwrap_or_default().to_string();

    view! {
        <div class="project-item">
            <div class="repo-info">
                <span><i class="octicon octicon-star"></i>{repository.stargazers()}</span>
                <span><i class="octicon octicon-repo-forked"></i>{repository.forks()}</span>
                <span class=badge_class>{language}</span>
            </div>
            <p>{description}</p>
        </div>
    }
}

/// Link to the project homepage. Renders nothing for an absent or empty homepage.
#[component]
pub fn HomepageLink(homepage: Option<String>) -> impl IntoView {
    homepage.filter(|homepage| !homepage.is_empty()).map(|homepage| {
        view! {
            <div class="project-item bottom-links">
                <a href=homepage target="_blank" rel="noopener noreferrer">
                    <i class="octicon octicon-browser"></i>
                    <span>"Go to"</span>
                </a>
            </div>
        }
    })
}

#[component]
pub fn Tile(repository: DisplayRepository, index: usize) -> impl IntoView {
    let class = if is_last_in_row(index) {
        "project project-tile project-stack last-in-row"
    } else {
        "project project-tile project-stack"
    };
    let name = repository.name().to_string();
    let key = name.clone();
    let url = repository.url().to_string();
    let homepage = repository.homepage().map(str::to_string);

    view! {
        <div class=class data-key=key>
            <Header name=name url=url />
            <StatsBlock repository=repository />
            <HomepageLink homepage=homepage />
        </div>
    }
}
