//! Precis - a text-summarization HTTP gateway.
//!
//! This crate implements a small JSON-over-HTTP service that accepts a block
//! of text and returns a shortened version. Summaries are produced by an
//! OpenAI chat-completion backend when an API key is configured; otherwise
//! the service runs in demo mode and synthesizes a deterministic placeholder
//! summary locally. A configured backend that fails at request time also
//! falls back to the placeholder, and every response carries a
//! `summary_source` tag recording which path produced it.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface
//! - reqwest for the outbound OpenAI call
//! - Tokio for the async runtime
//!
//! The generation backend is modeled as a [`clients::TextGenerator`]
//! capability, constructed once at startup and injected into the
//! [`core::summarize::Summarizer`] gateway, so the gateway's own logic is
//! testable without network access.
//!
//! # Example
//!
//! ```no_run
//! use precis::core::summarize::Summarizer;
//!
//! # #[tokio::main]
//! # async fn main() {
//! // No backend configured: demo mode, placeholder summaries.
//! let summarizer = Summarizer::new(None);
//! let outcome = summarizer
//!     .summarize("A long article that is comfortably past the minimum length.", 100)
//!     .await
//!     .unwrap();
//! println!("[{}] {}", outcome.source, outcome.summary);
//! # }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging for the service.
///
/// Sets up tracing-subscriber with a compact formatter. Call once at the
/// start of the binary before handling requests.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
