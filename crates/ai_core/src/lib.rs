//! Completion provider integration
//!
//! Client for OpenAI-compatible chat-completion APIs. Defines the
//! [`InferenceEngine`] port and provides the [`OpenAiInferenceEngine`]
//! implementation used in production.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse};
