//! LLM Provider Strategy Pattern
//!
//! Common interface for completion backends, so the search controller and
//! the server proxy never depend on a concrete HTTP client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_core::provider::LlmProvider;
//!
//! let provider = A0Provider::from_env();
//! let completion = provider.complete(&messages).await?;
//! ```
//!
//! Browser futures are not `Send`, so on `wasm32` the trait drops the bound.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Request body for a chat completion
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    pub fn new(messages: impl Into<Vec<Message>>) -> Self {
        Self {
            messages: messages.into(),
        }
    }
}

/// Response from an LLM completion
///
/// A body with a missing or `null` `completion` fails to decode and is
/// reported as a failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text, passed through untouched
    pub completion: String,
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new LLM backends.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LlmProvider: Send + Sync {
    /// Short provider name for logs and health output
    fn name(&self) -> &str;

    /// Generate a completion from messages
    async fn complete(&self, messages: &[Message]) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = CompletionRequest::new(vec![Message::system("sys"), Message::user("hi")]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"},
                ]
            })
        );
    }

    #[test]
    fn test_completion_ignores_extra_fields() {
        let completion: Completion =
            serde_json::from_str(r#"{"completion": "Buy index funds.", "model": "x"}"#).unwrap();
        assert_eq!(completion.completion, "Buy index funds.");
    }

    #[test]
    fn test_completion_requires_field() {
        assert!(serde_json::from_str::<Completion>(r#"{"error": "oops"}"#).is_err());
        assert!(serde_json::from_str::<Completion>(r#"{"completion": null}"#).is_err());
    }
}
