//! Console chat surface for local development.
//!
//! Stands in for the world engine's chat channel when running the agent
//! from a terminal: broadcasts print as plain lines, local-only notices
//! are prefixed so they are distinguishable from what other participants
//! would see.

use worldmate_core::chat::ChatPort;

/// Prints outbound chat lines to the terminal.
pub struct ConsoleChat;

impl ChatPort for ConsoleChat {
    async fn broadcast(&self, text: &str) {
        println!("{text}");
    }

    async fn notify_local(&self, text: &str) {
        println!("(only you) {text}");
    }
}
