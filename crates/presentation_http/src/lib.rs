//! WeatherWell HTTP presentation layer
//!
//! Axum router, handlers, and error mapping for the REST API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
