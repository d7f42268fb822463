//! Advisor service - health recommendations and weather-aware chat
//!
//! Both operations delegate to the completion provider. The two paths
//! treat quota exhaustion differently on purpose: the recommendations
//! path substitutes a fixed fallback set, while the chat path surfaces
//! the rate limit to the caller.

use std::{fmt, sync::Arc};

use domain::{AdvisorPayload, HealthRecommendation, Severity};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::CompletionPort};

/// System instruction for the recommendations path
const RECOMMENDATIONS_PROMPT: &str =
    "Generate health recommendations based on current weather conditions. \
     Respond with a JSON object holding a \"recommendations\" array; each entry \
     has \"type\", \"title\", \"description\", \"severity\" (low, medium or high) \
     and \"actions\" (a list of strings).";

/// Current weather context supplied by the caller for chat requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherContext {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Condition label, e.g. "clouds"
    pub conditions: String,
    /// Relative humidity percentage
    pub humidity: f64,
}

/// Service producing health recommendations and chat replies
pub struct AdvisorService {
    completion: Arc<dyn CompletionPort>,
}

impl fmt::Debug for AdvisorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorService").finish_non_exhaustive()
    }
}

impl AdvisorService {
    /// Create a new advisor service
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    /// Produce weather-conditioned health recommendations
    ///
    /// On quota exhaustion the provider's failure is swallowed and the
    /// static fallback set is returned instead.
    #[instrument(skip(self))]
    pub async fn health_recommendations(&self) -> Result<AdvisorPayload, ApplicationError> {
        match self
            .completion
            .generate_structured(RECOMMENDATIONS_PROMPT)
            .await
        {
            Ok(content) => {
                let payload: AdvisorPayload = serde_json::from_str(&content).map_err(|e| {
                    ApplicationError::Internal(format!("Unparseable recommendations: {e}"))
                })?;
                debug!(
                    count = payload.recommendations.len(),
                    "Recommendations generated"
                );
                Ok(payload)
            },
            Err(ApplicationError::RateLimited) => {
                warn!("Completion provider quota exhausted, serving fallback recommendations");
                Ok(AdvisorPayload {
                    recommendations: fallback_recommendations(),
                    dietary_suggestions: None,
                })
            },
            Err(e) => Err(e),
        }
    }

    /// Answer a chat message with the supplied weather context
    ///
    /// Quota exhaustion propagates here; this path has no fallback.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn chat(
        &self,
        message: &str,
        context: &WeatherContext,
    ) -> Result<String, ApplicationError> {
        let system_prompt = chat_system_prompt(context);
        let response = self
            .completion
            .generate_with_system(&system_prompt, message)
            .await?;

        debug!(response_len = response.len(), "Chat response generated");
        Ok(response)
    }
}

/// Build the chat system prompt embedding the current weather context
fn chat_system_prompt(context: &WeatherContext) -> String {
    format!(
        "You are a helpful weather and health advisor. Current weather context:\n\
         Temperature: {}°C\n\
         Conditions: {}\n\
         Humidity: {}%\n\n\
         Provide relevant health and weather-related advice based on these conditions.",
        context.temperature, context.conditions, context.humidity
    )
}

/// The fixed recommendations served when the provider's quota is exhausted
fn fallback_recommendations() -> Vec<HealthRecommendation> {
    vec![
        HealthRecommendation {
            kind: "general".to_string(),
            title: "Stay Hydrated".to_string(),
            description: "Maintain proper hydration throughout the day".to_string(),
            severity: Severity::Medium,
            actions: vec![
                "Drink water regularly".to_string(),
                "Monitor urine color".to_string(),
                "Increase intake during physical activity".to_string(),
            ],
        },
        HealthRecommendation {
            kind: "activity".to_string(),
            title: "Weather-Appropriate Exercise".to_string(),
            description: "Adjust your activities based on current weather conditions".to_string(),
            severity: Severity::Low,
            actions: vec![
                "Choose indoor activities during extreme weather".to_string(),
                "Wear appropriate clothing".to_string(),
                "Listen to your body's signals".to_string(),
            ],
        },
        HealthRecommendation {
            kind: "protection".to_string(),
            title: "Weather Protection".to_string(),
            description: "Protect yourself from current weather conditions".to_string(),
            severity: Severity::Medium,
            actions: vec![
                "Use appropriate sun protection".to_string(),
                "Wear weather-appropriate clothing".to_string(),
                "Stay informed about weather changes".to_string(),
            ],
        },
    ]
}
