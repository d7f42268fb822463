//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness endpoint
        .route("/health", get(handlers::health::health_check))
        // Client configuration
        .route("/api/config", get(handlers::config::get_config))
        // Weather API
        .route("/api/weather", get(handlers::weather::get_weather))
        // Advisor API
        .route(
            "/api/health-recommendations",
            get(handlers::advisor::get_recommendations),
        )
        .route("/api/chat", post(handlers::chat::chat))
        // Attach state
        .with_state(state)
}
