//! Conversation-state and turn-dispatch logic for Worldmate.
//!
//! This crate owns the whole pipeline from an inbound chat event to an
//! outbound chat line: the trigger filter, the append-only conversation
//! history, the persona prompt builder, and the turn engine that drives
//! them. The completion endpoint and the host chat channel sit behind
//! traits ([`llm::CompletionClient`], [`chat::port::ChatPort`]) so the
//! whole pipeline is unit-testable without a host runtime or network.

pub mod agent;
pub mod chat;
pub mod history;
pub mod llm;
pub mod prompt;
pub mod trigger;
