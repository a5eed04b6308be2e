use crate::infrastructures::adapters::primary::view::{ProjectListState, ProjectListView};
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

const PROJECTS_STATE_HEADER: &str = "x-projects-state";

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<ProjectListView>,
    pub anchor_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// Wait for the load to finish instead of rendering the current state.
    #[serde(default)]
    pub settled: bool,
}

fn html_fragment(state: &ProjectListState) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        [(PROJECTS_STATE_HEADER, state.name())],
        state.render(),
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn projects_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let current = if query.settled {
        state.view.settled().await
    } else {
        state.view.state()
    };
    html_fragment(&current)
}

fn embed_script(anchor_id: &str) -> String {
    format!(
        r#"(function () {{
  var anchor = document.getElementById("{anchor_id}");
  if (!anchor) {{ return; }}
  var base = new URL(document.currentScript.src);
  function fetchProjects(path) {{
    return fetch(new URL(path, base)).then(function (response) {{
      return response.text().then(function (html) {{
        return {{ state: response.headers.get("{PROJECTS_STATE_HEADER}"), html: html }};
      }});
    }});
  }}
  fetchProjects("/projects").then(function (current) {{
    anchor.innerHTML = current.html;
    if (current.state === "loading") {{
      return fetchProjects("/projects?settled=true").then(function (settled) {{
        anchor.innerHTML = settled.html;
      }});
    }}
  }}).catch(function (error) {{ console.log(error); }});
}})();
"#
    )
}

#[tracing::instrument(name = "embed_script", skip(state))]
async fn embed_script_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        embed_script(&state.anchor_id),
    )
}

#[tracing::instrument(name = "health_check")]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// The embed script runs on the host page's origin, so `/projects` must be
/// readable cross-origin, state header included.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .expose_headers([HeaderName::from_static(PROJECTS_STATE_HEADER)])
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/projects", get(projects_handler))
        .route("/embed.js", get(embed_script_handler))
        .route("/health", get(health_check))
        .with_state(app_state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
