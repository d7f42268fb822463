//! Health recommendation types
//!
//! The structured payload produced by the advisor, either parsed from the
//! completion provider's JSON output or substituted from the fallback set.

use serde::{Deserialize, Serialize};

/// Recommendation severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Low,
    /// Worth acting on
    Medium,
    /// Act now
    High,
}

/// A single health recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecommendation {
    /// Category tag, e.g. "general", "activity", "protection"
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Severity of the recommendation
    pub severity: Severity,
    /// Concrete actions, in order
    pub actions: Vec<String>,
}

/// Dietary suggestions accompanying recommendations
///
/// Declared for the full advisor payload but not yet produced by the
/// recommendations path; treated as an extension point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietarySuggestions {
    /// Suggested meals
    pub meals: Vec<String>,
    /// Hydration note
    pub hydration: String,
    /// Optional supplement list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplements: Option<Vec<String>>,
}

/// Full advisor payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorPayload {
    /// Health recommendations
    pub recommendations: Vec<HealthRecommendation>,
    /// Dietary suggestions, when the provider produces them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_suggestions: Option<DietarySuggestions>,
}
