//! REST API endpoint handlers.
//!
//! Handlers translate between the wire types and the gateway; all
//! summarization decisions live in [`crate::core::summarize`].

use axum::Json;
use axum::extract::{Path, State};

use crate::api::AppState;
use crate::core::models::{
    DEFAULT_MAX_LENGTH, HealthResponse, SampleSummaryResponse, StatusResponse, SummarizeRequest,
    SummarizeResponse,
};
use crate::core::samples;
use crate::errors::SummarizeError;

/// GET / — service status and readiness.
pub async fn root(State(app): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Hello, this API is to showcase AI-powered summarization!".to_string(),
        ai_status: app.summarizer.mode(),
        api_key_configured: app.summarizer.backend_configured(),
        status: "ready".to_string(),
    })
}

/// GET /health — liveness probe reporting the active backend mode.
pub async fn health(State(app): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai: app.summarizer.mode(),
        client_ready: app.summarizer.backend_configured(),
    })
}

/// POST /summarize — summarize the posted text.
///
/// Returns 400 when the text fails validation. A missing or failing backend
/// never fails the request; the response is then tagged `mock`.
pub async fn summarize(
    State(app): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, SummarizeError> {
    let outcome = app.summarizer.summarize(&body.text, body.max_length).await?;

    Ok(Json(SummarizeResponse {
        original_text: body.text,
        summary: outcome.summary,
        summary_source: outcome.source,
    }))
}

/// GET /summarize/{index} — summarize one built-in sample document.
///
/// Only index 1 is defined; anything else is a 404.
pub async fn summarize_sample(
    State(app): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<SampleSummaryResponse>, SummarizeError> {
    let Some((document, ground_truth)) = samples::sample_document(index) else {
        return Err(SummarizeError::NotFound("Document not found".to_string()));
    };

    let outcome = app.summarizer.summarize(document, DEFAULT_MAX_LENGTH).await?;

    Ok(Json(SampleSummaryResponse {
        document: document.to_string(),
        generated_summary: outcome.summary,
        ground_truth_summary: ground_truth.to_string(),
        summary_source: outcome.source,
    }))
}
