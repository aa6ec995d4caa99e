//! The summarization gateway: input validation, provider dispatch, and the
//! deterministic placeholder path.

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::TextGenerator;
use crate::core::models::SummarySource;
use crate::errors::SummarizeError;

/// Minimum number of characters (after trimming) a text must have before it
/// is worth summarizing. Fixed policy, not configurable.
pub const MIN_TEXT_CHARS: usize = 50;

/// Result of a single summarization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub source: SummarySource,
}

/// The summarization gateway.
///
/// Holds the optional generation backend, constructed once at startup and
/// shared read-only across requests. With no backend the gateway runs in
/// demo mode and every summary is the deterministic placeholder.
pub struct Summarizer {
    backend: Option<Arc<dyn TextGenerator>>,
}

impl Summarizer {
    #[must_use]
    pub fn new(backend: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { backend }
    }

    /// Whether a generation backend was configured at startup.
    #[must_use]
    pub fn backend_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// The source tag requests are expected to resolve to in the absence of
    /// backend failures.
    #[must_use]
    pub fn mode(&self) -> SummarySource {
        if self.backend.is_some() {
            SummarySource::OpenAi
        } else {
            SummarySource::Mock
        }
    }

    /// Summarize `text` down to roughly `max_length` words.
    ///
    /// A configured backend is tried exactly once; if the call fails the
    /// gateway falls back to the placeholder rather than surfacing the
    /// backend error, and the outcome's `source` tag records which path ran.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the trimmed text is empty or shorter than
    /// [`MIN_TEXT_CHARS`], or when `max_length` is zero. Validation runs
    /// before any provider call, so these rejections are identical with and
    /// without a backend.
    pub async fn summarize(
        &self,
        text: &str,
        max_length: u32,
    ) -> Result<SummaryOutcome, SummarizeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizeError::InvalidInput(
                "Text cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() < MIN_TEXT_CHARS {
            return Err(SummarizeError::InvalidInput(
                "Text too short to summarize".to_string(),
            ));
        }
        if max_length == 0 {
            return Err(SummarizeError::InvalidInput(
                "max_length must be a positive integer".to_string(),
            ));
        }

        let Some(backend) = &self.backend else {
            info!("No generation backend configured, using mock summary");
            return Ok(SummaryOutcome {
                summary: mock_summary(text, max_length),
                source: SummarySource::Mock,
            });
        };

        match backend.generate(text, max_length).await {
            Ok(summary) => Ok(SummaryOutcome {
                summary,
                source: SummarySource::OpenAi,
            }),
            Err(e) => {
                warn!("Generation backend failed, falling back to mock summary: {e}");
                Ok(SummaryOutcome {
                    summary: mock_summary(text, max_length),
                    source: SummarySource::Mock,
                })
            }
        }
    }
}

/// Deterministic placeholder summary used when no backend is configured or
/// the backend call fails. Identical `(text, max_length)` inputs always
/// yield identical output.
#[must_use]
pub fn mock_summary(text: &str, max_length: u32) -> String {
    format!(
        "Mock summary: This text contains {} characters and discusses various topics. \
         In a real implementation, AI would analyze the content and extract key points \
         to create a meaningful summary of approximately {max_length} words.",
        text.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _text: &str, _max_words: u32) -> Result<String, SummarizeError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _text: &str, _max_words: u32) -> Result<String, SummarizeError> {
            Err(SummarizeError::Backend("connection refused".to_string()))
        }
    }

    fn long_text() -> String {
        "x".repeat(200)
    }

    #[tokio::test]
    async fn rejects_empty_text() {
        let summarizer = Summarizer::new(None);
        let err = summarizer.summarize("", 150).await.unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[tokio::test]
    async fn rejects_whitespace_only_text() {
        let summarizer = Summarizer::new(None);
        let err = summarizer.summarize("   \n\t  ", 150).await.unwrap_err();
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[tokio::test]
    async fn rejects_short_text() {
        let summarizer = Summarizer::new(None);
        let err = summarizer.summarize("AI", 150).await.unwrap_err();
        assert_eq!(err.to_string(), "Text too short to summarize");
    }

    #[tokio::test]
    async fn rejects_short_text_even_with_backend() {
        let summarizer = Summarizer::new(Some(Arc::new(FixedGenerator("unused"))));
        let err = summarizer.summarize("AI", 150).await.unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn rejects_text_padded_to_minimum_with_whitespace() {
        // 10 meaningful chars padded to 60; the trimmed length is what counts.
        let padded = format!("{}{}{}", " ".repeat(25), "0123456789", " ".repeat(25));
        let summarizer = Summarizer::new(None);
        let err = summarizer.summarize(&padded, 150).await.unwrap_err();
        assert_eq!(err.to_string(), "Text too short to summarize");
    }

    #[tokio::test]
    async fn accepts_exactly_minimum_length() {
        let text = "y".repeat(MIN_TEXT_CHARS);
        let summarizer = Summarizer::new(None);
        let outcome = summarizer.summarize(&text, 150).await.unwrap();
        assert_eq!(outcome.source, SummarySource::Mock);
    }

    #[tokio::test]
    async fn rejects_zero_max_length() {
        let summarizer = Summarizer::new(None);
        let err = summarizer.summarize(&long_text(), 0).await.unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn mock_summary_encodes_character_count() {
        let summarizer = Summarizer::new(None);
        let outcome = summarizer.summarize(&long_text(), 150).await.unwrap();
        assert_eq!(outcome.source, SummarySource::Mock);
        assert!(outcome.summary.contains("200"));
        assert!(outcome.summary.contains("150 words"));
    }

    #[tokio::test]
    async fn mock_mode_is_idempotent() {
        let summarizer = Summarizer::new(None);
        let first = summarizer.summarize(&long_text(), 150).await.unwrap();
        let second = summarizer.summarize(&long_text(), 150).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mock_summary_counts_characters_not_bytes() {
        let text = "é".repeat(60);
        assert!(mock_summary(&text, 150).contains("60"));
    }

    #[tokio::test]
    async fn backend_summary_is_tagged_openai() {
        let summarizer = Summarizer::new(Some(Arc::new(FixedGenerator("A short summary."))));
        let outcome = summarizer.summarize(&long_text(), 150).await.unwrap();
        assert_eq!(outcome.source, SummarySource::OpenAi);
        assert_eq!(outcome.summary, "A short summary.");
    }

    #[tokio::test]
    async fn backend_failure_falls_back_to_mock() {
        let summarizer = Summarizer::new(Some(Arc::new(FailingGenerator)));
        let outcome = summarizer.summarize(&long_text(), 150).await.unwrap();
        assert_eq!(outcome.source, SummarySource::Mock);
        assert!(outcome.summary.contains("200"));
    }

    #[tokio::test]
    async fn mode_reflects_backend_configuration() {
        assert_eq!(Summarizer::new(None).mode(), SummarySource::Mock);
        let with_backend = Summarizer::new(Some(Arc::new(FixedGenerator(""))));
        assert_eq!(with_backend.mode(), SummarySource::OpenAi);
        assert!(with_backend.backend_configured());
    }
}
