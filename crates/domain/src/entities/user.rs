//! User entity and preference types

use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Celsius => write!(f, "celsius"),
            Self::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

/// User preferences
///
/// Deserialization is the validation boundary: payloads with an unknown
/// temperature unit or non-string list entries are rejected rather than
/// stored opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPreferences {
    /// Preferred temperature unit
    pub temperature_unit: TemperatureUnit,
    /// Health conditions the user wants advice tailored to
    pub health_conditions: Vec<String>,
    /// Dietary restrictions
    pub dietary_restrictions: Vec<String>,
}

/// A stored user record
///
/// Ids are assigned sequentially starting at 1 and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique sequential identifier
    pub id: u64,
    /// Free-form location label
    pub location: String,
    /// User preferences (replaced wholesale on update, never merged)
    pub preferences: UserPreferences,
}

/// Insert shape for a user, before an id has been assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Free-form location label
    pub location: String,
    /// Initial preferences
    pub preferences: UserPreferences,
}

impl NewUser {
    /// Build the stored record once the store has assigned an id
    #[must_use]
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            location: self.location,
            preferences: self.preferences,
        }
    }
}
