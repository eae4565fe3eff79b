//! Persona injection: the fixed behavioral instruction prepended to every
//! outbound prompt.
//!
//! Pure and total — no I/O, no failure mode. The instruction biases the
//! backend toward short, friendly Hinglish replies and is never sent
//! without the user's message following it.

use crate::types::OutboundPrompt;

/// Fixed system instruction describing tone and format of replies.
pub const SYSTEM_INSTRUCTION: &str = "You are a WhatsApp-style AI assistant. \
Respond in short, clear Hinglish messages (Hindi+English mix). Keep replies \
friendly and human-like.";

/// Separator between the instruction and the literal user message.
pub const PROMPT_SEPARATOR: &str = "\n\nUser: ";

/// Build the outbound prompt from an explicit instruction and the user
/// message. Concatenation order is fixed: instruction first, user text
/// second.
pub fn inject(system_instruction: &str, user_message: &str) -> OutboundPrompt {
    OutboundPrompt {
        system_instruction: system_instruction.to_string(),
        user_message: user_message.to_string(),
    }
}

/// Build the outbound prompt with the fixed persona.
pub fn inject_default(user_message: &str) -> OutboundPrompt {
    inject(SYSTEM_INSTRUCTION, user_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_precedes_user_message() {
        let prompt = inject_default("hello");
        assert_eq!(prompt.system_instruction, SYSTEM_INSTRUCTION);
        assert_eq!(prompt.user_message, "hello");

        let flat = prompt.flatten();
        assert!(flat.starts_with(SYSTEM_INSTRUCTION));
        assert!(flat.contains("User: hello"));
    }

    #[test]
    fn empty_message_still_carries_instruction() {
        let prompt = inject_default("");
        let flat = prompt.flatten();
        assert!(flat.starts_with(SYSTEM_INSTRUCTION));
        assert!(flat.ends_with(PROMPT_SEPARATOR));
    }

    #[test]
    fn user_message_is_not_altered() {
        let message = "  spaces and\nnewlines stay  ";
        let prompt = inject_default(message);
        assert_eq!(prompt.user_message, message);
    }
}
