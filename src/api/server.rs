//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{AppState, handlers};
use crate::core::summarize::Summarizer;

/// Build the full axum router.
pub fn build_router(summarizer: Arc<Summarizer>) -> Router {
    let state = AppState { summarizer };

    // CORS layer for the browser front-end, which is served from a
    // different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .route("/summarize/{index}", get(handlers::summarize_sample))
        .with_state(state)
        .layer(cors)
}

/// Bind `bind_addr`, spawn the accept loop, and return the bound address.
///
/// Binding to port 0 picks a free port, which is how the integration tests
/// run one server per test.
///
/// # Errors
///
/// Returns an error when the address cannot be bound.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Server error: {e}");
        }
    });

    Ok(addr)
}
