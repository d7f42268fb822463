//! WeatherWell application layer
//!
//! Services and ports sitting between the domain and the adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{CompletionPort, UserStore};
pub use services::{AdvisorService, WeatherContext};
