//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client issues both upstream requests, reshapes
//! the combined payload correctly, and surfaces upstream failures whole.

use integration_weather::{OpenWeatherClient, WeatherConfig, WeatherError, WeatherProvider};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample current-conditions response
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 13.41, "lat": 52.52},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds"}],
        "main": {
            "temp": 21.6,
            "feels_like": 20.4,
            "pressure": 1013,
            "humidity": 65
        },
        "visibility": 8500,
        "wind": {"speed": 4.4, "deg": 240},
        "name": "Berlin"
    })
}

/// Sample forecast response with twelve 3-hour slots (a day and a half)
fn sample_forecast_response() -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..12)
        .map(|i| {
            let day = 15 + i / 8;
            let hour = (i % 8) * 3;
            serde_json::json!({
                "dt_txt": format!("2024-01-{day:02} {hour:02}:00:00"),
                "main": {"temp": 8.2 + f64::from(i), "feels_like": 7.0, "humidity": 80, "pressure": 1009},
                "weather": [{"main": "Rain"}],
                "wind": {"speed": 5.7},
                "rain": {"3h": 1.1}
            })
        })
        .collect();
    serde_json::json!({"cnt": list.len(), "list": list})
}

/// Create a test client configured against the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: SecretString::from("test-key".to_string()),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

async fn mount_current(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

async fn mount_forecast(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn fetch_weather_normalizes_both_payloads() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_weather(52.52, 13.41).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let report = result.unwrap();

    assert_eq!(report.location, "Berlin");
    assert!((report.coordinates.lat - 52.52).abs() < f64::EPSILON);
    assert_eq!(report.current.temp, 22); // 21.6 rounds up
    assert_eq!(report.current.conditions, "clouds");
    assert_eq!(report.current.visibility, 9); // 8500 m -> 9 km
    assert_eq!(report.current.aqi, 50);

    // 12 slots down-sample to indices 0 and 8
    assert_eq!(report.forecast.len(), 2);
    assert_eq!(report.forecast[0].date.to_string(), "2024-01-15");
    assert_eq!(report.forecast[1].date.to_string(), "2024-01-16");
    assert_eq!(report.forecast[0].temp, 8);
    assert_eq!(report.forecast[0].conditions, "rain");
}

#[tokio::test]
async fn fetch_weather_sends_metric_units_and_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .and(query_param("lat", "52.52"))
        .and(query_param("lon", "13.41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_weather(52.52, 13.41).await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn current_endpoint_failure_fails_the_whole_fetch() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_weather(52.52, 13.41).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn forecast_endpoint_failure_fails_the_whole_fetch() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401, "message": "Invalid API key"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_weather(52.52, 13.41).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn invalid_coordinates_skip_upstream_entirely() {
    let mock_server = MockServer::start().await;

    // No upstream call may be made for out-of-range coordinates
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_weather(91.0, 13.41).await;

    assert!(
        matches!(result, Err(WeatherError::InvalidCoordinates)),
        "Expected InvalidCoordinates, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_weather(52.52, 13.41).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}
