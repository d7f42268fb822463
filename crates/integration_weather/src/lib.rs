//! OpenWeather integration
//!
//! Client for the OpenWeather API (<https://openweathermap.org/api>).
//! Fetches current conditions and the 5-day/3-hour forecast concurrently
//! and normalizes both into a single [`domain::WeatherReport`].

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherConfig, WeatherError, WeatherProvider};
