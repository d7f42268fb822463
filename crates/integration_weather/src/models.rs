//! Raw OpenWeather API response shapes
//!
//! Only the fields the normalization step reads are declared; everything
//! else in the upstream payloads is ignored.

use serde::Deserialize;

/// Main measurement block shared by current and forecast entries
#[derive(Debug, Clone, Deserialize)]
pub struct MainMeasurements {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    pub humidity: u8,
    #[serde(default)]
    pub pressure: f64,
}

/// One weather descriptor; the first entry carries the primary condition
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescriptor {
    pub main: String,
}

/// Wind block
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Rolling precipitation block on the current-conditions endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RainOneHour {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
}

/// 3-hour precipitation accumulation block on the forecast endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RainThreeHour {
    #[serde(rename = "3h", default)]
    pub three_hour: Option<f64>,
}

/// Response of the current-conditions endpoint (`/weather`)
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    pub main: MainMeasurements,
    pub weather: Vec<WeatherDescriptor>,
    pub wind: Wind,
    #[serde(default)]
    pub rain: Option<RainOneHour>,
    /// Visibility in meters
    #[serde(default)]
    pub visibility: Option<f64>,
}

/// One 3-hour forecast slot
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    /// Timestamp as "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub main: MainMeasurements,
    pub weather: Vec<WeatherDescriptor>,
    pub wind: Wind,
    #[serde(default)]
    pub rain: Option<RainThreeHour>,
}

/// Response of the forecast endpoint (`/forecast`)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_response_parses_minimal_payload() {
        let json = r#"{
            "name": "Berlin",
            "main": {"temp": 21.6, "feels_like": 20.9, "humidity": 65, "pressure": 1013},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds"}],
            "wind": {"speed": 4.1, "deg": 240}
        }"#;
        let parsed: CurrentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "Berlin");
        assert!((parsed.main.temp - 21.6).abs() < f64::EPSILON);
        assert!(parsed.rain.is_none());
        assert!(parsed.visibility.is_none());
    }

    #[test]
    fn rain_blocks_parse_numeric_keys() {
        let rain: RainOneHour = serde_json::from_str(r#"{"1h": 0.4}"#).unwrap();
        assert_eq!(rain.one_hour, Some(0.4));

        let rain: RainThreeHour = serde_json::from_str(r#"{"3h": 2.5}"#).unwrap();
        assert_eq!(rain.three_hour, Some(2.5));
    }

    #[test]
    fn forecast_response_parses_slots() {
        let json = r#"{
            "list": [{
                "dt": 1700000000,
                "dt_txt": "2024-01-15 12:00:00",
                "main": {"temp": 8.2, "feels_like": 6.1, "humidity": 80, "pressure": 1009},
                "weather": [{"main": "Rain"}],
                "wind": {"speed": 5.7},
                "rain": {"3h": 1.1}
            }]
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.list.len(), 1);
        assert_eq!(parsed.list[0].dt_txt, "2024-01-15 12:00:00");
        assert_eq!(parsed.list[0].rain.as_ref().unwrap().three_hour, Some(1.1));
    }
}
