//! Inference configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Completion provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Provider base URL (default: <https://api.openai.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as a bearer token
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Default model for completion requests
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            default_model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}
