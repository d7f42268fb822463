//! Application state shared across handlers

use std::sync::Arc;

use application::{AdvisorService, UserStore};
use infrastructure::AppConfig;
use integration_weather::WeatherProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather provider for forecast aggregation
    pub weather: Arc<dyn WeatherProvider>,
    /// Advisor service for recommendations and chat
    pub advisor: Arc<AdvisorService>,
    /// User preference storage
    pub user_store: Arc<dyn UserStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
