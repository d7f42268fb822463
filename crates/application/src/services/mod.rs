//! Application services

pub mod advisor;

pub use advisor::{AdvisorService, WeatherContext};
