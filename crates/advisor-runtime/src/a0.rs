//! a0 LLM Provider
//!
//! Implementation of `LlmProvider` for the hosted `https://api.a0.dev/ai/llm`
//! chat endpoint. No authentication, retries or timeout.

use advisor_core::{
    error::{AdvisorError, Result},
    message::Message,
    provider::{Completion, CompletionRequest, LlmProvider},
};
use async_trait::async_trait;

/// Hosted completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.a0.dev/ai/llm";

/// a0 provider configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct A0Config {
    /// Full URL of the chat completion endpoint
    pub endpoint: String,
}

impl Default for A0Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl A0Config {
    /// Read `A0_LLM_URL`, falling back to the hosted endpoint.
    /// In the browser there is no environment, so this is always the default.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("A0_LLM_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        Self { endpoint }
    }
}

/// a0 LLM provider
#[derive(Clone, Debug)]
pub struct A0Provider {
    client: reqwest::Client,
    config: A0Config,
}

impl A0Provider {
    /// Create a provider for a custom endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_config(A0Config {
            endpoint: endpoint.into(),
        })
    }

    /// Create from configuration
    pub fn from_config(config: A0Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(A0Config::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Decode a response body. The HTTP status is not consulted: any body
    /// carrying a `completion` string is accepted.
    fn parse_completion(body: &str) -> Result<Completion> {
        serde_json::from_str(body).map_err(|e| AdvisorError::Parse(e.to_string()))
    }
}

impl Default for A0Provider {
    fn default() -> Self {
        Self::from_config(A0Config::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl LlmProvider for A0Provider {
    fn name(&self) -> &str {
        "a0"
    }

    async fn complete(&self, messages: &[Message]) -> Result<Completion> {
        let request = CompletionRequest::new(messages);

        tracing::debug!(endpoint = %self.config.endpoint, "Sending completion request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(%status, "Completion endpoint returned an error status");
        }

        Self::parse_completion(&body)
    }
}
