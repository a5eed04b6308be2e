use anyhow::Context;
use github_showcase::application::use_cases::load_projects::{
    LoadProjectsInteractor, LoadProjectsUseCaseInput,
};
use github_showcase::config::AppConfig;
use github_showcase::infrastructures::adapters::primary::view::ProjectListView;
use github_showcase::infrastructures::adapters::primary::web::{AppState, create_router};
use github_showcase::infrastructures::adapters::secondary::external_apis::github::GitHubApiAdapter;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .context("Failed to create OTLP exporter")?;
    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .build();
    let tracer = provider.tracer("github-showcase");

    let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(telemetry)
        .with(fmt_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let result = run().await;

    if let Err(e) = provider.shutdown() {
        tracing::error!("Failed to shut down tracer provider: {}", e);
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let initialize_span = info_span!("initialize");
    let config = initialize_span.in_scope(|| {
        info!("Application starting");
        AppConfig::from_env()
    })?;

    // Build dependencies
    let github_api_adapter = Arc::new(GitHubApiAdapter::new(
        config.github_api_base_url.clone(),
        config.github_request_timeout,
    )?);
    let load_projects = Arc::new(LoadProjectsInteractor::new(github_api_adapter));

    let shutdown = CancellationToken::new();
    let view = Arc::new(ProjectListView::new(shutdown.child_token()));
    let load_task = view.mount(
        load_projects,
        LoadProjectsUseCaseInput {
            username: config.github_username.clone(),
        },
    )?;

    let app_state = Arc::new(AppState {
        view: view.clone(),
        anchor_id: config.anchor_id.clone(),
    });
    let app = create_router(app_state);

    info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    let signal = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("Shutdown requested");
        signal.cancel();
    });

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .await?;

    view.unmount();
    if let Err(e) = load_task.await {
        tracing::warn!("Load task ended abnormally: {}", e);
    }
    info!("Server exited");

    Ok(())
}
