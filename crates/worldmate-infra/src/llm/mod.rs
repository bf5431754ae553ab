//! Completion endpoint clients.

pub mod openai;

pub use openai::OpenAiChatClient;
