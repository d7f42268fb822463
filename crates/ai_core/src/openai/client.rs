//! OpenAI chat-completions client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse};

/// Quota-exhaustion code the provider reports in its error body
const INSUFFICIENT_QUOTA: &str = "insufficient_quota";

/// Completion engine backed by an OpenAI-compatible API
pub struct OpenAiInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for OpenAiInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiInferenceEngine")
            .field("base_url", &self.config.base_url)
            .field("default_model", &self.config.default_model)
            .finish_non_exhaustive()
    }
}

impl OpenAiInferenceEngine {
    /// Create a new engine with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized completion engine"
        );

        Ok(Self { client, config })
    }

    /// Create an engine with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, InferenceError> {
        Self::new(InferenceConfig::default())
    }

    /// Build the completions URL
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    /// Map a non-success response to the appropriate error
    ///
    /// A 429 status or an `insufficient_quota` error code both signal
    /// exhaustion and become [`InferenceError::RateLimited`].
    fn error_for_status(status: StatusCode, body: &str) -> InferenceError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return InferenceError::RateLimited;
        }

        if let Ok(error_body) = serde_json::from_str::<ApiErrorBody>(body) {
            if error_body.error.code.as_deref() == Some(INSUFFICIENT_QUOTA) {
                return InferenceError::RateLimited;
            }
        }

        if status.is_server_error() {
            InferenceError::ServerError(format!("HTTP {status}"))
        } else {
            InferenceError::RequestFailed(format!("HTTP {status}"))
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<CompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Chat-completions response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    model: String,
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionResponseMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Provider error body
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl InferenceEngine for OpenAiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let completion_request = CompletionRequest {
            model: self.resolve_model(&request).to_string(),
            messages: request
                .messages
                .iter()
                .map(|m| CompletionMessage {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect(),
            response_format: request
                .json_output
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        debug!("Sending completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&completion_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Completion request failed");
            return Err(Self::error_for_status(status, &body));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(InferenceError::EmptyResponse)?;

        debug!(model = %completion.model, "Completion received");

        Ok(InferenceResponse {
            content,
            model: completion.model,
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
