//! OpenWeather HTTP client
//!
//! Issues the two upstream requests concurrently and reshapes the combined
//! payload into the normalized report served by the API.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{Coordinates, CurrentConditions, ForecastDay, WeatherReport};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentResponse, ForecastResponse, ForecastSlot};

/// Placeholder air-quality index; the upstream free tier provides none
const DEFAULT_AQI: i32 = 50;

/// Forecast entries arrive at 3-hour intervals, so every 8th entry is one
/// calendar day apart
const SLOTS_PER_DAY: usize = 8;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key passed as the `appid` query parameter
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather provider trait for fetching normalized reports
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch and normalize weather data for a location
    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError>;
}

/// OpenWeather HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(lat: f64, lon: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Issue one upstream GET and deserialize the body
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        lat: f64,
        lon: f64,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!(url = %url, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.config.api_key.expose_secret().to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!(
                "Weather API error: {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Round to the nearest integer, half toward positive infinity
    ///
    /// Matches JavaScript's `Math.round`, which the public wire format was
    /// shaped by: `-2.5` rounds to `-2`, not `-3`.
    #[allow(clippy::cast_possible_truncation)]
    fn round(value: f64) -> i32 {
        (value + 0.5).floor() as i32
    }

    /// Primary condition label, lowercased
    fn condition_label(descriptors: &[crate::models::WeatherDescriptor]) -> Result<String, WeatherError> {
        descriptors
            .first()
            .map(|d| d.main.to_lowercase())
            .ok_or_else(|| WeatherError::ParseError("Missing weather descriptor".to_string()))
    }

    /// Map one forecast slot into a daily entry
    fn normalize_forecast_slot(slot: &ForecastSlot) -> Result<ForecastDay, WeatherError> {
        let date_part = slot
            .dt_txt
            .split(' ')
            .next()
            .unwrap_or(slot.dt_txt.as_str());
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| WeatherError::ParseError(format!("Invalid forecast date: {e}")))?;

        Ok(ForecastDay {
            date,
            temp: Self::round(slot.main.temp),
            conditions: Self::condition_label(&slot.weather)?,
            precipitation: slot
                .rain
                .as_ref()
                .and_then(|r| r.three_hour)
                .unwrap_or(0.0),
            wind_speed: Self::round(slot.wind.speed),
            humidity: slot.main.humidity,
        })
    }

    /// Combine both upstream payloads into the normalized report
    fn normalize(
        lat: f64,
        lon: f64,
        current: &CurrentResponse,
        forecast: &ForecastResponse,
    ) -> Result<WeatherReport, WeatherError> {
        #[allow(clippy::cast_possible_truncation)]
        let visibility = current
            .visibility
            .map_or(0, |meters| (meters / 1000.0 + 0.5).floor() as i64);

        let daily = forecast
            .list
            .iter()
            .step_by(SLOTS_PER_DAY)
            .take(WeatherReport::MAX_FORECAST_DAYS)
            .map(Self::normalize_forecast_slot)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WeatherReport {
            location: current.name.clone(),
            coordinates: Coordinates { lat, lon },
            current: CurrentConditions {
                temp: Self::round(current.main.temp),
                humidity: current.main.humidity,
                conditions: Self::condition_label(&current.weather)?,
                aqi: DEFAULT_AQI,
                precipitation: current
                    .rain
                    .as_ref()
                    .and_then(|r| r.one_hour)
                    .unwrap_or(0.0),
                wind_speed: Self::round(current.wind.speed),
                pressure: current.main.pressure,
                feels_like: Self::round(current.main.feels_like),
                visibility,
            },
            forecast: daily,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = %lat, lon = %lon))]
    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError> {
        Self::validate_coordinates(lat, lon)?;

        // Structured join: both calls run concurrently and the first
        // failure aborts the whole fetch. No partial report is produced.
        let (current, forecast) = tokio::try_join!(
            self.get_json::<CurrentResponse>("weather", lat, lon),
            self.get_json::<ForecastResponse>("forecast", lat, lon),
        )?;

        Self::normalize(lat, lon, &current, &forecast)
    }
}
