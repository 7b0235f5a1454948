//! OpenAI chat-completion adapter.
//!
//! Direct integration with the OpenAI API via `reqwest`. Requests carry
//! a system style directive built from the client profile (generation)
//! or a single tone probe message (tone detection); only the first
//! choice's message content is read back. There is no retry, timeout,
//! or fallback policy: transport failures, non-success statuses, and
//! malformed bodies surface as [`ServiceError`] values.

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::profile::PerspectiveProfile;
use crate::service::GenerationService;
use crate::utilities::errors::ServiceError;
use crate::utilities::prompts::{style_directive, tone_probe};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Base URL of the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-backed [`GenerationService`] implementation.
#[derive(Debug, Clone)]
pub struct OpenAIService {
    /// Model name sent with every request.
    pub model: String,
    /// API key; `None` means no credential was found.
    pub api_key: Option<String>,
    /// Base URL override for gateways and tests.
    pub base_url: Option<String>,
}

impl OpenAIService {
    /// Create a new adapter.
    ///
    /// # Arguments
    ///
    /// * `model` - Model name (e.g. "gpt-4").
    /// * `api_key` - Optional API key (defaults to the `OPENAI_API_KEY`
    ///   environment variable).
    /// * `base_url` - Optional custom base URL.
    pub fn new(
        model: impl Into<String>,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        let api_key = api_key.or_else(|| std::env::var("OPENAI_API_KEY").ok());
        Self {
            model: model.into(),
            api_key,
            base_url,
        }
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Issue one chat-completion request and return the first choice's
    /// message content.
    async fn send_chat_request(&self, messages: Vec<Value>) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_ref().ok_or(ServiceError::MissingApiKey)?;

        let body = json!({
            "model": self.model,
            "messages": messages,
        });
        let endpoint = format!("{}/chat/completions", self.api_base_url());

        let call_id = Uuid::new_v4();
        log::debug!(
            "Chat completion request: call_id={}, model={}, messages={}",
            call_id,
            self.model,
            messages.len()
        );

        let client = reqwest::Client::new();
        let response = client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                status,
                body: response_text,
            });
        }

        let response_json: Value =
            serde_json::from_str(&response_text).map_err(|e| ServiceError::MalformedResponse {
                detail: format!("invalid JSON body: {}", e),
            })?;

        if let Some(usage) = response_json.get("usage") {
            log::debug!(
                "Chat completion usage: call_id={}, prompt={}, completion={}, total={}",
                call_id,
                usage.get("prompt_tokens").and_then(Value::as_i64).unwrap_or(0),
                usage.get("completion_tokens").and_then(Value::as_i64).unwrap_or(0),
                usage.get("total_tokens").and_then(Value::as_i64).unwrap_or(0)
            );
        }

        extract_message_content(&response_json)
    }
}

impl Default for OpenAIService {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, None, None)
    }
}

#[async_trait]
impl GenerationService for OpenAIService {
    fn generate_content(
        &self,
        prompt: &str,
        profile: Option<&PerspectiveProfile>,
    ) -> Result<String, ServiceError> {
        let rt = tokio::runtime::Runtime::new().map_err(ServiceError::Runtime)?;
        rt.block_on(self.agenerate_content(prompt, profile))
    }

    fn detect_tone(&self, text: &str) -> Result<String, ServiceError> {
        let rt = tokio::runtime::Runtime::new().map_err(ServiceError::Runtime)?;
        rt.block_on(self.adetect_tone(text))
    }

    async fn agenerate_content(
        &self,
        prompt: &str,
        profile: Option<&PerspectiveProfile>,
    ) -> Result<String, ServiceError> {
        let messages = vec![
            json!({ "role": "system", "content": style_directive(profile) }),
            json!({ "role": "user", "content": prompt }),
        ];
        self.send_chat_request(messages).await
    }

    async fn adetect_tone(&self, text: &str) -> Result<String, ServiceError> {
        let messages = vec![json!({ "role": "user", "content": tone_probe(text) })];
        let answer = self.send_chat_request(messages).await?;
        Ok(answer.trim().to_lowercase())
    }
}

/// Extract the first choice's message content from a chat-completion
/// response body.
fn extract_message_content(response: &Value) -> Result<String, ServiceError> {
    let message = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| ServiceError::MalformedResponse {
            detail: "no message in first choice".to_string(),
        })?;

    let content = message
        .get("content")
        .and_then(|content| content.as_str())
        .ok_or_else(|| ServiceError::MalformedResponse {
            detail: "no text content in message".to_string(),
        })?;

    Ok(content.to_string())
}
