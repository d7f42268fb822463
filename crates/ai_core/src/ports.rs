//! Port definitions for the completion provider
//!
//! Defines the trait that completion adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A message in the completion request (OpenAI-compatible format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceMessage {
    pub role: String,
    pub content: String,
}

/// Request for a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Messages in the conversation
    pub messages: Vec<InferenceMessage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Ask the provider for machine-parseable JSON output
    #[serde(default)]
    pub json_output: bool,
}

impl InferenceRequest {
    /// Create a request carrying only a system instruction
    pub fn system_only(system: impl Into<String>) -> Self {
        Self {
            messages: vec![InferenceMessage {
                role: "system".to_string(),
                content: system.into(),
            }],
            model: None,
            json_output: false,
        }
    }

    /// Create a request with a system prompt and a user turn
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                InferenceMessage {
                    role: "system".to_string(),
                    content: system.into(),
                },
                InferenceMessage {
                    role: "user".to_string(),
                    content: user.into(),
                },
            ],
            model: None,
            json_output: false,
        }
    }

    /// Request structured (JSON) output from the provider
    pub const fn structured(mut self) -> Self {
        self.json_output = true;
        self
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from the completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated content; guaranteed non-empty
    pub content: String,
    /// Model that generated the response
    pub model: String,
}

/// Port for completion provider implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response
    ///
    /// Implementations must map provider quota/rate-limit signals to
    /// [`InferenceError::RateLimited`] and an empty completion to
    /// [`InferenceError::EmptyResponse`].
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Get the current default model
    fn default_model(&self) -> &str;
}
