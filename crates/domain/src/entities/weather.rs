//! Normalized weather report types
//!
//! The shapes the API serves after reshaping the upstream provider's
//! payloads. Serialized in camelCase to match the public wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

/// Current conditions snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Temperature in Celsius, rounded to the nearest integer
    pub temp: i32,
    /// Relative humidity percentage (0-100), unrounded
    pub humidity: u8,
    /// Lowercased condition label, e.g. "clouds"
    pub conditions: String,
    /// Air quality index. The upstream free tier provides none, so this is
    /// a constant placeholder.
    pub aqi: i32,
    /// Rolling precipitation in mm, 0 when the upstream omits it
    pub precipitation: f64,
    /// Wind speed in m/s, rounded to the nearest integer
    pub wind_speed: i32,
    /// Surface pressure in hPa, unrounded
    pub pressure: f64,
    /// Feels-like temperature in Celsius, rounded
    pub feels_like: i32,
    /// Visibility in kilometers, rounded
    pub visibility: i64,
}

/// One down-sampled forecast entry (one per calendar day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Forecast date
    pub date: NaiveDate,
    /// Temperature in Celsius, rounded
    pub temp: i32,
    /// Lowercased condition label
    pub conditions: String,
    /// 3-hour precipitation accumulation in mm, 0 when absent
    pub precipitation: f64,
    /// Wind speed in m/s, rounded
    pub wind_speed: i32,
    /// Relative humidity percentage
    pub humidity: u8,
}

/// Complete normalized weather report
///
/// Constructed fresh per request; never persisted. The forecast holds at
/// most five entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Location name reported by the upstream
    pub location: String,
    /// Coordinates the report was requested for
    pub coordinates: Coordinates,
    /// Current conditions
    pub current: CurrentConditions,
    /// Up to five daily forecast entries
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    /// Maximum number of forecast entries a report may carry
    pub const MAX_FORECAST_DAYS: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> WeatherReport {
        WeatherReport {
            location: "Berlin".to_string(),
            coordinates: Coordinates {
                lat: 52.52,
                lon: 13.41,
            },
            current: CurrentConditions {
                temp: 22,
                humidity: 65,
                conditions: "clouds".to_string(),
                aqi: 50,
                precipitation: 0.0,
                wind_speed: 4,
                pressure: 1013.0,
                feels_like: 21,
                visibility: 9,
            },
            forecast: vec![ForecastDay {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                temp: 20,
                conditions: "rain".to_string(),
                precipitation: 1.2,
                wind_speed: 3,
                humidity: 70,
            }],
        }
    }

    #[test]
    fn report_serializes_camel_case() {
        let json = serde_json::to_value(sample_report()).unwrap();
        let current = &json["current"];
        assert_eq!(current["windSpeed"], 4);
        assert_eq!(current["feelsLike"], 21);
        assert!(current.get("wind_speed").is_none());
        assert_eq!(json["forecast"][0]["windSpeed"], 3);
    }

    #[test]
    fn forecast_date_serializes_as_iso_date() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["forecast"][0]["date"], "2025-06-01");
    }

    #[test]
    fn report_round_trips() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: WeatherReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
