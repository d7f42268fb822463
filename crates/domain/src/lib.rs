//! WeatherWell domain layer
//!
//! Core entities and domain errors. This crate performs no I/O.

pub mod entities;
pub mod errors;

pub use entities::{
    advice::{AdvisorPayload, DietarySuggestions, HealthRecommendation, Severity},
    user::{NewUser, TemperatureUnit, User, UserPreferences},
    weather::{Coordinates, CurrentConditions, ForecastDay, WeatherReport},
};
pub use errors::DomainError;
