use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod state;

pub use error::ApiError;
pub use pipeline::summarize_document;
pub use state::AppState;

/// Build the application router. When `static_dir` is set, every path not
/// matched by the API is served from that directory.
pub fn create_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::permissive();
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    let router = Router::new()
        .route("/api/analyze", post(handlers::analyze_document))
        .route("/api/health", get(handlers::health));

    let router = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static files");
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        None => router,
    };

    router
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve `app` until Ctrl-C.
pub async fn serve(addr: SocketAddr, app: Router) -> ec_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, summarize_document, ApiError, AppState};
    pub use ec_core::{Error, Result};
}
