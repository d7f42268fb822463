//! WeatherWell infrastructure
//!
//! Configuration loading, the in-memory user store, and the adapter
//! bridging the completion engine to the application port.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::CompletionAdapter;
pub use config::{AppConfig, ServerConfig};
pub use persistence::MemoryUserStore;
