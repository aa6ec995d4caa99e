//! HTTP surface: shared state, endpoint handlers, and server bootstrap.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server};

use std::sync::Arc;

use crate::core::summarize::Summarizer;

/// Shared application state passed to all handlers via axum's `State`
/// extractor. Read-only after startup, so handlers run concurrently without
/// coordination.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}
