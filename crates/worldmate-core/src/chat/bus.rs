//! Broadcast chat bus for distributing `ChatEvent` to subscribers.
//!
//! Built on `tokio::sync::broadcast`, the `ChatBus` supports multiple
//! concurrent subscribers. Publishing with no active subscribers is a no-op.
//! The host world engine publishes every chat message here; the agent
//! subscribes once per session and unsubscribes (drops the receiver) on
//! teardown.

use tokio::sync::broadcast;
use worldmate_types::chat::ChatEvent;

/// Multi-consumer bus for in-world chat events.
///
/// Wraps a `tokio::sync::broadcast` channel. Cloning the bus clones the
/// sender, allowing multiple producers and consumers.
pub struct ChatBus {
    sender: broadcast::Sender<ChatEvent>,
}

impl ChatBus {
    /// Create a new chat bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create a new subscriber that will receive all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.sender.subscribe()
    }

    /// Publish a chat event to all current subscribers.
    ///
    /// If there are no subscribers, the event is silently dropped.
    pub fn publish(&self, event: ChatEvent) {
        let _ = self.sender.send(event);
    }
}

impl Clone for ChatBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl std::fmt::Debug for ChatBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatBus")
            .field("receiver_count", &self.sender.receiver_count())
            .finish()
    }
}
