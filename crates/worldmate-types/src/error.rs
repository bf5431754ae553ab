use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to persona configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required persona fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
}

/// Why a turn ended without a broadcast.
///
/// Every variant is recovered locally: the triggering user gets exactly one
/// local-only notice, the turn is aborted, and the agent stays subscribed
/// for the next mention. None of these are fatal to the agent process.
#[derive(Debug, Error)]
pub enum TurnError {
    /// One or more required persona/credential fields are missing.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The endpoint answered successfully but returned zero choices.
    #[error("completion endpoint returned no choices")]
    EmptyResult,

    /// Network failure, non-2xx status, or malformed payload.
    #[error("completion request failed: {0}")]
    Transport(#[from] LlmError),
}
