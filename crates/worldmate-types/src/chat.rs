//! Chat event and outbound chat line types.
//!
//! An inbound [`ChatEvent`] is what the host chat bus delivers for every
//! message in the shared channel. It is ephemeral: the agent inspects it
//! once and retains nothing beyond the trigger decision.
//!
//! An outbound [`ChatLine`] is what the agent hands back to the host:
//! either a broadcast visible to all participants or a local-only notice
//! visible to the triggering participant alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chat message observed on the host chat bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Raw message text as typed by the participant.
    pub text: String,
    /// Identifier of the participant who sent the message.
    pub sender: String,
}

impl ChatEvent {
    pub fn new(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
        }
    }
}

/// Who can see an outbound chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Visible to all participants in the shared channel.
    Broadcast,
    /// Visible only to the triggering participant.
    Local,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Broadcast => write!(f, "broadcast"),
            Audience::Local => write!(f, "local"),
        }
    }
}

/// An outbound message for the host chat bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    pub audience: Audience,
    pub text: String,
}

impl ChatLine {
    /// A line visible to everyone in the channel.
    pub fn broadcast(text: impl Into<String>) -> Self {
        Self {
            audience: Audience::Broadcast,
            text: text.into(),
        }
    }

    /// A line visible only to the triggering participant.
    pub fn local(text: impl Into<String>) -> Self {
        Self {
            audience: Audience::Local,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_event_new() {
        let event = ChatEvent::new("@Luna hello", "visitor-7");
        assert_eq!(event.text, "@Luna hello");
        assert_eq!(event.sender, "visitor-7");
    }

    #[test]
    fn test_audience_serde() {
        let json = serde_json::to_string(&Audience::Local).unwrap();
        assert_eq!(json, "\"local\"");
        let parsed: Audience = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Audience::Local);
    }

    #[test]
    fn test_chat_line_constructors() {
        let line = ChatLine::broadcast("Luna: hi everyone");
        assert_eq!(line.audience, Audience::Broadcast);
        assert_eq!(line.text, "Luna: hi everyone");

        let notice = ChatLine::local("Luna: I'm thinking...");
        assert_eq!(notice.audience, Audience::Local);
    }
}
