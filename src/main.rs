use anyhow::Context;
use mood_tracker::api::{self, app_state::AppState};
use mood_tracker::config::loader::ConfigLoader;
use mood_tracker::models::activity::ActivityCatalog;
use mood_tracker::observability::init_tracing;
use mood_tracker::services::{AnalysisService, ClaudeClient, LlmClient};
use mood_tracker::storage::create_rating_store;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match std::env::args().nth(1) {
        Some(path) => ConfigLoader::load_from(path.into()),
        None => ConfigLoader::load(),
    }
    .context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;
    let _log_guard = init_tracing(&config.logging);

    info!("Starting {}...", config.app_name);

    let store = create_rating_store(&config.storage).await?;
    info!(backend = store.backend(), "Rating store initialized");

    let client = ClaudeClient::from_config(&config.llm)?
        .map(|client| Arc::new(client) as Arc<dyn LlmClient>);
    let analysis = AnalysisService::new(client);

    let catalog = ActivityCatalog::new(config.catalog.activities.clone());
    let app_state = AppState::with_store(catalog, store, analysis).await?;
    info!("Application state created");

    let router = api::create_router(app_state.clone(), &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Mood Tracker backend listening on http://{}", addr);
    info!("  GET  /api/activities  - List all activities");
    info!("  POST /api/ratings     - Submit ratings");
    info!("  GET  /api/history     - View rating history");
    info!("  GET  /api/health      - Health check");
    if app_state.analysis.uses_llm() {
        info!(model = %config.llm.model, "Status: Using Claude API");
    } else {
        info!("Status: Using placeholder responses");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(
        entries = app_state.store.count().await?,
        "Server stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
