//! Completion provider port
//!
//! Defines the interface the advisor service uses to reach the
//! language-completion API.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for chat-completion operations
///
/// Implementations must surface provider quota/rate-limit signals as
/// [`ApplicationError::RateLimited`] and an empty completion as
/// [`ApplicationError::EmptyResponse`].
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Run a system-instruction-only completion requesting structured
    /// (JSON) output and return the raw content
    async fn generate_structured(&self, system_prompt: &str) -> Result<String, ApplicationError>;

    /// Run a completion with a system prompt and a user turn
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<String, ApplicationError>;
}
