//! OpenAiChatClient -- concrete [`CompletionClient`] for the chat-completions
//! endpoint.
//!
//! Sends one `POST {base}/chat/completions` per triggered turn with bearer
//! authentication. No retries, no backoff: the request is sent once and the
//! result (success or failure) is handed back to the turn engine.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use worldmate_core::llm::CompletionClient;
use worldmate_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Default base URL for the completion endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions HTTP client.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the Authorization header. The struct intentionally does not
/// derive `Debug`: the key must never reach logs or panic output.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiChatClient {
    /// Create a new client against the default endpoint.
    ///
    /// The request timeout doubles as the bound on a hung completion call:
    /// there is no separate per-turn cancellation mechanism.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CompletionClient for OpenAiChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = self.url("/chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        // A successful response with zero choices deserializes fine; the
        // turn engine maps it to the empty-result condition.
        response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))
    }
}
