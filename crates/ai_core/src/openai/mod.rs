//! OpenAI-compatible completion engine implementation
//!
//! Talks to any server exposing the OpenAI chat-completions API.

mod client;

pub use client::OpenAiInferenceEngine;
