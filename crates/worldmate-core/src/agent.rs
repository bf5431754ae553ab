//! ConversationAgent: the turn engine.
//!
//! Drives the whole pipeline once per qualifying chat event:
//! trigger filter -> validate -> prompt build -> completion request ->
//! response relay. Per turn the state machine is
//!
//! ```text
//! Idle -> Validating -> (Fail: NotifyLocal, end)
//!      -> Building -> AwaitingCompletion -> (Fail: NotifyLocal, end)
//!                                        -> (Success: CommitHistory, Broadcast, end)
//! ```
//!
//! No turn ever transitions back to an earlier state. Turns are serialized
//! per conversation: the history lock is held across the whole
//! validate -> build -> complete -> commit sequence, so concurrent triggers
//! queue instead of racing the history. Single-turn observable behavior is
//! unchanged by this; only concurrent-turn ordering is.

use tokio::sync::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use worldmate_types::chat::ChatEvent;
use worldmate_types::error::TurnError;
use worldmate_types::llm::CompletionRequest;
use worldmate_types::persona::PersonaConfig;

use crate::chat::port::ChatPort;
use crate::history::ConversationHistory;
use crate::llm::CompletionClient;
use crate::{prompt, trigger};

/// Model identifier sent with every completion request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// How a handled chat event ended.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The event did not address this persona (or was self-authored).
    Ignored,
    /// The turn completed; carries the broadcast reply content.
    Replied(String),
    /// The turn aborted; the triggering user got a local-only notice.
    Failed(TurnError),
}

/// The in-world persona agent.
///
/// Owns the persona configuration, the conversation history, a completion
/// client, and the outbound chat port. Generic over both seams so the
/// pipeline is testable without a host runtime or network (core never
/// depends on infra).
pub struct ConversationAgent<C: CompletionClient, P: ChatPort> {
    persona: PersonaConfig,
    client: C,
    chat: P,
    history: Mutex<ConversationHistory>,
}

impl<C: CompletionClient, P: ChatPort> ConversationAgent<C, P> {
    /// Create an agent with a fresh (unprimed) conversation.
    pub fn new(persona: PersonaConfig, client: C, chat: P) -> Self {
        Self {
            persona,
            client,
            chat,
            history: Mutex::new(ConversationHistory::new()),
        }
    }

    /// The configured persona name (mention handle and broadcast prefix).
    pub fn persona_name(&self) -> &str {
        &self.persona.name
    }

    /// A stable snapshot of the conversation so far.
    pub async fn history(&self) -> ConversationHistory {
        self.history.lock().await.clone()
    }

    /// Consume chat events until the bus closes.
    ///
    /// This is the session subscription: the receiver is taken once and
    /// dropped (unsubscribed) when the loop ends. Lagged events are skipped
    /// with a warning rather than aborting the session.
    pub async fn run(&self, mut events: broadcast::Receiver<ChatEvent>) {
        info!(persona = %self.persona.name, "agent subscribed to chat bus");
        loop {
            match events.recv().await {
                Ok(event) => {
                    self.handle_event(&event).await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "chat bus lagged; events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        info!(persona = %self.persona.name, "chat bus closed; agent unsubscribed");
    }

    /// Inspect one chat event and run a turn if it qualifies.
    ///
    /// Every failure is recovered here: the triggering user gets exactly one
    /// local-only notice, history keeps only what was already committed, and
    /// the agent remains ready for the next mention. The returned outcome is
    /// informational (for operators and tests); nothing propagates.
    pub async fn handle_event(&self, event: &ChatEvent) -> TurnOutcome {
        let Some(extracted) = trigger::extract_prompt(event, &self.persona.name) else {
            return TurnOutcome::Ignored;
        };

        debug!(sender = %event.sender, "mention accepted, starting turn");
        match self.run_turn(&extracted).await {
            Ok(reply) => TurnOutcome::Replied(reply),
            Err(err) => TurnOutcome::Failed(err),
        }
    }

    async fn run_turn(&self, extracted: &str) -> Result<String, TurnError> {
        let name = &self.persona.name;

        // Serialization point: held across validate -> build -> complete -> commit.
        let mut history = self.history.lock().await;

        // Validating
        if let Err(err) = self.persona.validate() {
            warn!(error = %err, "turn aborted: invalid persona configuration");
            self.chat
                .notify_local(&format!("{name}: Please fill out all fields"))
                .await;
            return Err(err.into());
        }

        // Building: the user turn is committed before the response arrives.
        let messages = prompt::build_turn(&mut history, &self.persona, extracted);

        // Immediate feedback while the network round trip is in flight.
        self.chat
            .notify_local(&format!("{name}: I'm thinking..."))
            .await;

        let generation = &self.persona.generation;
        let request = CompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            messages,
            max_tokens: generation.max_tokens,
            temperature: generation.temperature,
            presence_penalty: generation.presence_penalty,
            frequency_penalty: generation.frequency_penalty,
        };

        // AwaitingCompletion
        let response = match self.client.complete(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "completion request failed");
                self.chat.notify_local(&format!("{name}: {err}")).await;
                return Err(err.into());
            }
        };

        // Only the first choice is used; the rest are discarded.
        let Some(reply) = response.first_message().cloned() else {
            self.chat
                .notify_local(&format!("{name}: No response"))
                .await;
            return Err(TurnError::EmptyResult);
        };

        // CommitHistory, Broadcast
        history.push(reply.clone());
        self.chat
            .broadcast(&format!("{name}: {}", reply.content))
            .await;
        Ok(reply.content)
    }
}
