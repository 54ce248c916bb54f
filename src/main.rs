use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod state;

use kamus_bugis::config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kamus_bugis=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / Muat konfigurasi
    config::init_config().expect("Failed to load configuration");
    let app_config = config::config();
    tracing::info!(
        "Server will listen on {}:{}",
        app_config.server.host,
        app_config.server.port
    );

    // The dictionary is fixed at startup; handlers share the engine read-only
    // / Kamus tetap sejak awal, mesin dibagikan hanya-baca
    let state = Arc::new(AppState::new());
    tracing::info!("Kamus loaded: {} entries", state.engine.entries().len());

    let app = Router::new()
        .route("/", get(api::pages::index))
        .route("/api/search", get(api::search::search))
        .route("/api/health", get(api::server::health_check))
        .route("/api/version", get(api::server::get_version_info))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
