//! Thin HTTP surface over [`review_core`]: a single stateless Axum service
//! exposing `POST /api/contract-review` and `GET /healthz`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use state::AppState;

/// Build the Axum router: one POST route, one health route, and the
/// tracing/timeout/body-limit middleware stack every request passes
/// through.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let timeout = state.config.timeout();

    Router::new()
        .route("/api/contract-review", post(routes::contract_review))
        .route("/healthz", get(routes::healthz))
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::request_id))
        .with_state(state)
}

/// Start the server: initialize tracing, build the router, bind, and serve
/// until a shutdown signal arrives.
pub async fn start_server(config: AppConfig) -> Result<(), std::io::Error> {
    let addr = config
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let state = Arc::new(AppState::new(config));
    let app = build_router(state.clone());

    tracing::info!(%addr, timeout_secs = state.config.timeout_secs, "starting review-server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("review-server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
