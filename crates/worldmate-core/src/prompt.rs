//! Prompt builder: turns an extracted mention into the outgoing message list.
//!
//! The very first turn of a conversation is special: instead of the raw
//! trigger text it commits a persona-priming user message that embeds the
//! configured identity and the triggering text together. Every later turn
//! appends the extracted text verbatim as a plain user turn.

use worldmate_types::llm::Message;
use worldmate_types::persona::PersonaConfig;

use crate::history::ConversationHistory;

/// The persona-priming message that opens a conversation.
///
/// Embeds all five identity attributes, the stay-in-character instruction,
/// and the triggering text as the subject of the first exchange -- all as a
/// single user turn.
pub fn prime_message(persona: &PersonaConfig, prompt: &str) -> Message {
    Message::user(format!(
        "Respond as a fictional human with the following characteristics:\n\
         Name: {}\n\
         Age: {}\n\
         Gender: {}\n\
         Personality: {}\n\
         Interests: {}\n\
         Never break character. This will be the first message of the conversation:\n\
         {}",
        persona.name, persona.age, persona.gender, persona.personality, persona.interests, prompt
    ))
}

/// Commit the user turn for this prompt and return the outgoing message list.
///
/// - Unprimed history: commits the priming message as the initial history.
/// - Primed history: commits the prompt text verbatim as a user turn.
///
/// The user turn is committed before any response arrives; on failure the
/// turn engine leaves it in place and appends nothing else. The returned
/// list is the post-commit snapshot: prior history plus exactly the new
/// user turn, in order.
pub fn build_turn(
    history: &mut ConversationHistory,
    persona: &PersonaConfig,
    prompt: &str,
) -> Vec<Message> {
    let user_turn = if history.is_primed() {
        Message::user(prompt)
    } else {
        prime_message(persona, prompt)
    };

    history.push(user_turn);
    history.snapshot().as_ref().clone()
}
