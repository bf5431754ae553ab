//! LLM request/response types for Worldmate.
//!
//! These types model the wire shapes for the chat-completions endpoint:
//! conversation messages, completion requests with generation tuning, and
//! error handling. They serialize directly to the JSON the endpoint expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in a conversation.
///
/// Some endpoints label the reply role `model` instead of `assistant`;
/// both deserialize to [`MessageRole::Assistant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    #[serde(alias = "model")]
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" | "model" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant-role message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
///
/// Constructed fresh per turn, sent once, never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

/// One completion choice from the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: Message,
}

/// Response body from the chat-completions endpoint.
///
/// Only `choices[0].message` is consumed; additional choices are discarded.
/// An absent or empty `choices` array is the empty-result condition, not a
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// The first completion choice, if the endpoint returned any.
    pub fn first_message(&self) -> Option<&Message> {
        self.choices.first().map(|c| &c.message)
    }
}

/// Errors from completion endpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("completion endpoint error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by completion endpoint")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_model_alias() {
        let parsed: MessageRole = "model".parse().unwrap();
        assert_eq!(parsed, MessageRole::Assistant);

        let from_json: MessageRole = serde_json::from_str("\"model\"").unwrap();
        assert_eq!(from_json, MessageRole::Assistant);
    }

    #[test]
    fn test_message_role_serde() {
        let role = MessageRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hello");
        assert_eq!(user.role, MessageRole::User);
        assert_eq!(user.content, "hello");

        let assistant = Message::assistant("hi there");
        assert_eq!(assistant.role, MessageRole::Assistant);
        assert_eq!(assistant.content, "hi there");
    }

    #[test]
    fn test_completion_request_serialization() {
        let req = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![Message::user("Hello")],
            max_tokens: 100,
            temperature: 0.2,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["presence_penalty"], 0.0);
        assert_eq!(json["frequency_penalty"], 0.0);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_completion_response_first_message() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "First"}},
                {"message": {"role": "assistant", "content": "Second"}}
            ]
        }"#;
        let resp: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.choices.len(), 2);
        assert_eq!(resp.first_message().unwrap().content, "First");
    }

    #[test]
    fn test_completion_response_empty_choices() {
        let resp: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(resp.first_message().is_none());
    }

    #[test]
    fn test_completion_response_missing_choices_defaults_empty() {
        let resp: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.choices.is_empty());
        assert!(resp.first_message().is_none());
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 500: boom".to_string(),
        };
        assert!(err.to_string().contains("HTTP 500: boom"));
        assert_eq!(
            LlmError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }
}
