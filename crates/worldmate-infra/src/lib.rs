//! Boundary implementations for Worldmate.
//!
//! Everything here touches the outside world: the HTTP client for the
//! chat-completions endpoint and the persona configuration loader. The
//! behavior they plug into lives in worldmate-core.

pub mod config;
pub mod llm;
