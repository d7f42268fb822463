//! Chat handler

use application::WeatherContext;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message
    pub message: String,
    /// Current weather context supplied by the client
    pub context: ChatContext,
}

/// Context wrapper carried in the chat request
#[derive(Debug, Deserialize)]
pub struct ChatContext {
    /// Weather conditions to ground the reply in
    pub weather: WeatherContext,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant response
    pub response: String,
}

/// Handle a weather-aware chat request
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let response = state
        .advisor
        .chat(&request.message, &request.context.weather)
        .await?;

    Ok(Json(ChatResponse { response }))
}
