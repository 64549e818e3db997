//! REST API over the dispatch optimizer.
//!
//! Provides two endpoints:
//! - `GET /defaults`: the configured starting inputs
//! - `POST /optimize`: solve a JSON `DispatchRequest`

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::dispatch::DispatchRequest;

pub use types::{ErrorResponse, OptimizeResponse};

/// Immutable application state shared across all request handlers.
///
/// Every solve is independent, so nothing here is ever mutated and no
/// locking is needed.
pub struct AppState {
    /// Inputs returned by `GET /defaults`.
    pub defaults: DispatchRequest,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/defaults", get(handlers::get_defaults))
        .route("/optimize", post(handlers::post_optimize))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
