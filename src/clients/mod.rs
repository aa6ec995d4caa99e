//! Outbound clients for the generation backend.

pub mod llm_client;

pub use llm_client::LlmClient;

use async_trait::async_trait;

use crate::errors::SummarizeError;

/// Capability contract of the generation backend: produce a summary string
/// given the source text and a target length in words. Calls may fail, and
/// latency and output are non-deterministic; the gateway treats a failure as
/// a signal to fall back, never as a reason to crash the request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, text: &str, max_words: u32) -> Result<String, SummarizeError>;
}
