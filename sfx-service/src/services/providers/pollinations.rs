//! Pollinations text provider.
//!
//! Pollinations is a keyless text-generation API. It answers a chat-style POST
//! either with the raw generated text or with a JSON object shaped like
//! `{"role":"assistant","content":"..."}`; both shapes are normalized here.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Pollinations provider configuration.
#[derive(Debug, Clone)]
pub struct PollinationsConfig {
    pub url: String,
    pub model: String,
    pub timeout: Duration,
}

/// Pollinations text provider. Holds one pooled HTTP client; exactly one
/// outbound request is made per call, with no retries.
pub struct PollinationsTextProvider {
    config: PollinationsConfig,
    client: Client,
}

impl PollinationsTextProvider {
    pub fn new(config: PollinationsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl TextProvider for PollinationsTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateTextRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            model: &self.config.model,
            json_mode: false,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Pollinations API"
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        Ok(normalize_body(body))
    }
}

fn map_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else if err.is_connect() {
        ProviderError::Unreachable(err.to_string())
    } else {
        ProviderError::Network(err.to_string())
    }
}

/// Pollinations may answer with the raw markdown brief or with a JSON object
/// wrapping it in a `content` field. Anything that is not an object with a
/// string `content` is passed through verbatim.
fn normalize_body(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(serde_json::Value::Object(map)) => match map.get("content") {
            Some(serde_json::Value::String(content)) => content.clone(),
            _ => body,
        },
        _ => body,
    }
}

// ============================================================================
// Pollinations API request types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateTextRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    model: &'a str,
    #[serde(rename = "jsonMode")]
    json_mode: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}
