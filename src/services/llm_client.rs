//! LLM client
//!
//! Single-shot calls to an Anthropic-style messages endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::config::LlmConfig;
use crate::error::{AppError, Result};

/// Text completion backend
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send `prompt` as the only user message and return the reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier for logs.
    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Claude messages API client
#[derive(Debug, Clone)]
pub struct ClaudeClient {
    client: Client,
    api_key: String,
    endpoint: String,
    api_version: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeClient {
    pub fn new(api_key: &str, config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: config.endpoint.clone(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Client for `config`, or `None` when no usable credential is set.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>> {
        config
            .credential()
            .map(|key| Self::new(key, config))
            .transpose()
    }
}

#[async_trait]
impl LlmClient for ClaudeClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling LLM");
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "API error: {} {}",
                status.as_u16(),
                error_text
            )));
        }

        let body: MessagesResponse = response.json().await?;
        body.content
            .into_iter()
            .filter(|block| block.kind.is_empty() || block.kind == "text")
            .find_map(|block| block.text)
            .ok_or_else(|| AppError::Upstream("API response contained no text".into()))
    }

    fn model(&self) -> &str {
        &self.model
    }
}
