//! Weather report handler

use axum::{Json, extract::Query, extract::State};
use domain::WeatherReport;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the weather endpoint
///
/// Both parameters arrive as strings so that missing and malformed values
/// can be rejected with 400 before any upstream call is made.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

fn parse_coordinate(value: Option<&str>, name: &str) -> Result<f64, ApiError> {
    let raw = value
        .ok_or_else(|| ApiError::BadRequest(format!("Missing required parameter: {name}")))?;
    raw.parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid value for parameter: {name}")))
}

/// Fetch current conditions and the 5-day forecast
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let lat = parse_coordinate(query.lat.as_deref(), "lat")?;
    let lon = parse_coordinate(query.lon.as_deref(), "lon")?;

    let report = state.weather.fetch_weather(lat, lon).await?;
    Ok(Json(report))
}
