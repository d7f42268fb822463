//! Client configuration handler

use axum::{Json, extract::State};
use secrecy::ExposeSecret;
use serde_json::{Value, json};

use crate::state::AppState;

/// Expose the weather API key for browser-side map widgets
///
/// The key comes from the loaded configuration, never a literal.
pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "OPENWEATHER_API_KEY": state.config.weather.api_key.expose_secret(),
    }))
}
