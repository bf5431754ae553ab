//! Trigger filter: decides whether an inbound chat event starts a turn.
//!
//! An event qualifies when it is not self-authored and its text contains
//! the `@<persona name>` mention. The prompt text is everything following
//! the first occurrence of the mention.

use worldmate_types::chat::ChatEvent;

/// Extract the prompt text if the event addresses this persona.
///
/// Returns `None` when:
/// - the sender is the persona itself (prevents a self-reply loop on the
///   agent's own broadcast messages), or
/// - the text does not contain the `@<persona_name>` mention.
///
/// On a match, the returned prompt is the text after the first occurrence
/// of the mention, trimmed of surrounding whitespace.
pub fn extract_prompt(event: &ChatEvent, persona_name: &str) -> Option<String> {
    if event.sender == persona_name {
        return None;
    }

    let mention = format!("@{persona_name}");
    let (_, rest) = event.text.split_once(&mention)?;
    Some(rest.trim().to_string())
}
