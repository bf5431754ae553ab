//! Shared domain types for Worldmate.
//!
//! This crate contains the core domain types used across the Worldmate agent:
//! persona configuration, chat events, LLM request/response shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod chat;
pub mod error;
pub mod llm;
pub mod persona;
