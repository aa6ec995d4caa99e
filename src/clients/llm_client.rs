//! LLM (`OpenAI`) API client module
//!
//! Encapsulates all `OpenAI` API interactions for generating summaries.

use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::clients::TextGenerator;
use crate::errors::SummarizeError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed low sampling temperature; repeated calls on the same input stay
/// qualitatively similar, though never bit-identical.
const TEMPERATURE: f64 = 0.3;

/// Generation budget per requested word of summary. An approximation, not a
/// word-count guarantee.
const TOKENS_PER_WORD: u32 = 2;

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    timeout: Duration,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        timeout: Duration,
    ) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
            timeout,
        }
    }

    /// Build the chat prompt: a system instruction fixing the target length
    /// in words, plus the user text as the content to summarize.
    pub fn build_prompt(&self, text: &str, max_words: u32) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(format!(
                    "You are a helpful assistant that creates concise summaries. \
                     Summarize the following text in {max_words} words or less."
                )),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(text.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    fn build_request_body(&self, prompt: &[ChatCompletionMessage], max_words: u32) -> Value {
        let messages: Vec<Value> = prompt
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                // Prompts built here are text-only.
                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    Content::ImageUrl(_) => Value::Null,
                };

                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": messages,
            "max_tokens": max_words * TOKENS_PER_WORD,
            "temperature": TEMPERATURE
        })
    }

    /// Run a single chat-completion call and return the generated summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request to `OpenAI` fails, times out, or
    /// the response cannot be parsed into the expected shape.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
        max_words: u32,
    ) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{prompt:?}");

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating summary with {} messages in prompt",
            prompt.len()
        );

        let request_body = self.build_request_body(&prompt, max_words);

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SummarizeError::Http(format!("Failed to build OpenAI HTTP client: {e}")))?;

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizeError::Http(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummarizeError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizeError::Http(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = client
            .post(CHAT_COMPLETIONS_URL)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::Http(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::Backend(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::Backend(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let text_opt = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|s| s.trim().to_string());

        text_opt.ok_or_else(|| SummarizeError::Backend("No text in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, text: &str, max_words: u32) -> Result<String, SummarizeError> {
        let prompt = self.build_prompt(text, max_words);
        self.generate_summary(prompt, max_words).await
    }
}
