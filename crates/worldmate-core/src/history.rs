//! Append-only conversation history.
//!
//! The history is the ordered message log forming the completion context.
//! It lives in process memory only and is never persisted across restarts.
//!
//! Invariant: the backing sequence is never mutated in place. Every append
//! builds a new sequence, so an [`Arc`] snapshot taken before an append
//! still sees the old turns. A reader holding a previous snapshot is never
//! surprised by a later append.

use std::sync::Arc;

use worldmate_types::llm::Message;

/// Ordered, append-only message log for one conversation.
///
/// Starts unprimed (empty). The first committed turn is the persona-priming
/// user message; from then on the history is primed and subsequent turns
/// are appended verbatim.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Arc<Vec<Message>>,
}

impl ConversationHistory {
    /// Create an empty (unprimed) history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the priming turn has been committed yet.
    pub fn is_primed(&self) -> bool {
        !self.turns.is_empty()
    }

    /// Number of committed turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// A stable snapshot of the current turns.
    ///
    /// The snapshot is unaffected by later appends.
    pub fn snapshot(&self) -> Arc<Vec<Message>> {
        Arc::clone(&self.turns)
    }

    /// Append a turn, producing a new backing sequence.
    pub fn push(&mut self, message: Message) {
        let mut turns = Vec::with_capacity(self.turns.len() + 1);
        turns.extend_from_slice(&self.turns);
        turns.push(message);
        self.turns = Arc::new(turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_unprimed() {
        let history = ConversationHistory::new();
        assert!(!history.is_primed());
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_push_primes_history() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("first"));
        assert!(history.is_primed());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("one"));
        history.push(Message::assistant("two"));
        history.push(Message::user("three"));

        let snapshot = history.snapshot();
        let contents: Vec<&str> = snapshot.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "two", "three"]);
    }

    #[test]
    fn test_snapshot_is_stable_across_appends() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("one"));

        let before = history.snapshot();
        history.push(Message::assistant("two"));

        assert_eq!(before.len(), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(before[0].content, "one");
    }

    #[test]
    fn test_clone_then_push_does_not_affect_original() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("one"));

        let mut forked = history.clone();
        forked.push(Message::user("two"));

        assert_eq!(history.len(), 1);
        assert_eq!(forked.len(), 2);
    }
}
