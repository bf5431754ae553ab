//! CompletionClient trait definition.
//!
//! This is the seam between the turn engine and the completion endpoint.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the concrete
//! HTTP implementation lives in worldmate-infra.

use worldmate_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// A client for the remote chat-completions endpoint.
///
/// One call per triggered turn: the full accumulated message list plus the
/// generation parameters go out, the raw response comes back. Zero-choice
/// responses are returned as-is -- mapping them to the empty-result
/// condition is the turn engine's job, not the client's.
pub trait CompletionClient: Send + Sync {
    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
