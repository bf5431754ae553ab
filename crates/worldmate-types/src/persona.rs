//! Persona configuration for the in-world agent.
//!
//! The host delivers these fields through its configuration surface; the
//! agent treats them as immutable for the process lifetime. Identity fields
//! are all required -- absence is a validation failure, not a default. Only
//! the generation tuning values have documented defaults.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::ConfigError;

/// Generation tuning values forwarded to the completion endpoint.
///
/// Each value falls back to its documented default when not configured:
/// `max_tokens` 100, `temperature` 0.2, `presence_penalty` 0.0,
/// `frequency_penalty` 0.0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f64,
    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f64,
}

fn default_max_tokens() -> u32 {
    100
}

fn default_temperature() -> f64 {
    // The endpoint defaults higher; lower reads better for chat bots.
    0.2
}

fn default_presence_penalty() -> f64 {
    0.0
}

fn default_frequency_penalty() -> f64 {
    0.0
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            presence_penalty: default_presence_penalty(),
            frequency_penalty: default_frequency_penalty(),
        }
    }
}

/// The configured fictional identity the agent role-plays.
///
/// `name` doubles as the mention handle (`@<name>`), the broadcast prefix,
/// and the self-trigger guard.
#[derive(Debug, Deserialize)]
pub struct PersonaConfig {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub personality: String,
    pub interests: String,
    /// Bearer credential for the completion endpoint. Required secret.
    pub api_key: SecretString,
    #[serde(default)]
    pub generation: GenerationParams,
}

impl PersonaConfig {
    /// Check that every required field is present and non-empty.
    ///
    /// Returns a [`ConfigError::MissingFields`] naming all offending fields
    /// at once, so the user can fix the configuration in one pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("age", &self.age),
            ("gender", &self.gender),
            ("personality", &self.personality),
            ("interests", &self.interests),
        ] {
            if value.trim().is_empty() {
                missing.push(field.to_string());
            }
        }

        if self.api_key.expose_secret().trim().is_empty() {
            missing.push("api_key".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields { fields: missing })
        }
    }
}
