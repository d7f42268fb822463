//! Completion adapter
//!
//! Bridges any [`ai_core::InferenceEngine`] to the application's
//! [`CompletionPort`], translating the engine's error taxonomy.

use std::sync::Arc;

use ai_core::{InferenceEngine, InferenceError, InferenceRequest};
use application::{ApplicationError, CompletionPort};
use async_trait::async_trait;

/// Adapter exposing an inference engine as a [`CompletionPort`]
pub struct CompletionAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for CompletionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionAdapter").finish_non_exhaustive()
    }
}

impl CompletionAdapter {
    /// Create a new adapter over the given engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }
}

fn map_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::RateLimited => ApplicationError::RateLimited,
        InferenceError::EmptyResponse => ApplicationError::EmptyResponse,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl CompletionPort for CompletionAdapter {
    async fn generate_structured(&self, system_prompt: &str) -> Result<String, ApplicationError> {
        let request = InferenceRequest::system_only(system_prompt).structured();
        let response = self.engine.generate(request).await.map_err(map_error)?;
        Ok(response.content)
    }

    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<String, ApplicationError> {
        let request = InferenceRequest::with_system(system_prompt, message);
        let response = self.engine.generate(request).await.map_err(map_error)?;
        Ok(response.content)
    }
}
