use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    model::{LinearModel, Predictor},
};

/// Start the premium predictor server
///
/// This function:
/// 1. Loads the model artifact (once; read-only for process lifetime)
/// 2. Creates the Axum application
/// 3. Binds to the configured address
/// 4. Serves requests until ctrl-c, then shuts down gracefully
pub async fn start_server(config: Config) -> Result<()> {
    let model = LinearModel::load(Path::new(&config.model.path))
        .with_context(|| format!("loading model artifact from {}", config.model.path))?;
    info!(
        model = %model.name(),
        version = %model.version(),
        path = %config.model.path,
        "Loaded model artifact"
    );

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let state = AppState {
        config: Arc::new(config),
        model: Arc::new(model),
    };

    let app = create_router(state);

    info!("Starting premium predictor on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form::form_page))
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/predict", post(handlers::predict::handle_predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
