//! Wire types for the HTTP surface.
//!
//! All records are request-scoped; nothing here survives the call that
//! created it.

use serde::{Deserialize, Serialize};

/// Target summary length in words when the request omits `max_length`.
pub const DEFAULT_MAX_LENGTH: u32 = 150;

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

/// Body of `POST /summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

/// Which path produced a summary. The only externally observable signal of
/// degraded operation, so it must truthfully reflect the branch that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    OpenAi,
    Mock,
}

impl SummarySource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Mock => "mock",
        }
    }
}

impl std::fmt::Display for SummarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a successful `POST /summarize` response.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    /// Echo of the input, byte for byte. Trimming applies only to the
    /// validation check, never to this field.
    pub original_text: String,
    pub summary: String,
    pub summary_source: SummarySource,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub ai_status: SummarySource,
    pub api_key_configured: bool,
    pub status: String,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub ai: SummarySource,
    pub client_ready: bool,
}

/// Body of `GET /summarize/{index}`.
#[derive(Debug, Serialize)]
pub struct SampleSummaryResponse {
    pub document: String,
    pub generated_summary: String,
    pub ground_truth_summary: String,
    pub summary_source: SummarySource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_request_defaults_max_length() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(req.max_length, 150);
    }

    #[test]
    fn summarize_request_accepts_explicit_max_length() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{"text":"hello","max_length":40}"#).unwrap();
        assert_eq!(req.max_length, 40);
    }

    #[test]
    fn summarize_request_requires_text() {
        let result = serde_json::from_str::<SummarizeRequest>(r#"{"max_length":40}"#);
        assert!(result.is_err());
    }

    #[test]
    fn summary_source_serializes_to_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&SummarySource::OpenAi).unwrap(),
            r#""openai""#
        );
        assert_eq!(serde_json::to_string(&SummarySource::Mock).unwrap(), r#""mock""#);
    }

    #[test]
    fn summary_source_display_matches_wire_tag() {
        assert_eq!(SummarySource::OpenAi.to_string(), "openai");
        assert_eq!(SummarySource::Mock.to_string(), "mock");
    }
}
