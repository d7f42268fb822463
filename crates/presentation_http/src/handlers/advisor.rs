//! Health recommendations handler

use axum::{Json, extract::State};
use domain::AdvisorPayload;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Produce weather-conditioned health recommendations
///
/// When the completion provider's quota is exhausted the service returns
/// its fixed fallback set, so this endpoint still answers 200.
#[instrument(skip(state))]
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<Json<AdvisorPayload>, ApiError> {
    let payload = state.advisor.health_recommendations().await?;
    Ok(Json(payload))
}
