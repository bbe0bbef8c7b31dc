//! OpenRouter chat provider.
//!
//! Speaks the OpenAI-compatible `/chat/completions` API, so any endpoint with
//! the same shape can be used through [`OpenRouterProvider::with_base_url`].
//!
//! # Example
//!
//! ```ignore
//! use proxyrank_models::providers::OpenRouterProvider;
//!
//! let provider = OpenRouterProvider::new(api_key)
//!     .with_referer("https://github.com/proxyrank/proxyrank")
//!     .with_title("proxyrank");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatRequest, ChatResponse, Message, ModelProvider, StopReason, Usage};
use crate::auth::ApiKey;
use crate::{Error, Result};

/// Default OpenRouter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

// ────────────────────────────────────────────────────────────────────────────
// OpenRouter API Types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `/chat/completions`.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Response body from `/chat/completions`.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

impl TryFrom<CompletionResponse> for ChatResponse {
    type Error = Error;

    fn try_from(response: CompletionResponse) -> Result<Self> {
        let usage = response
            .usage
            .map(|u| Usage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::ProviderApi("response contained no choices".to_string()))?;

        Ok(Self {
            content: choice.message.content.unwrap_or_default(),
            stop_reason: choice
                .finish_reason
                .as_deref()
                .map(StopReason::from_finish_reason),
            usage,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenRouterProvider
// ────────────────────────────────────────────────────────────────────────────

/// OpenRouter chat provider.
pub struct OpenRouterProvider {
    base_url: String,
    api_key: ApiKey,
    referer: Option<String>,
    title: Option<String>,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    /// Create a provider against the default OpenRouter URL.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            referer: None,
            title: None,
            client: reqwest::Client::new(),
        }
    }

    /// Use a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Send an `HTTP-Referer` header identifying the calling application.
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Send an `X-Title` header naming the calling application.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the base URL for this provider.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait::async_trait]
impl ModelProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let body = CompletionRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut builder = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body);
        if let Some(referer) = &self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            builder = builder.header("X-Title", title);
        }

        debug!(model = %request.model, "sending chat completion");
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderApi(format!(
                "OpenRouter API returned {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::ProviderApi(e.to_string()))?;

        completion.try_into()
    }
}
