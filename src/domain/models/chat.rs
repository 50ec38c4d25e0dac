use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Role identifier the model backend uses for its own turns.
pub const MODEL_ROLE: &str = "model";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCharacter {
    pub name: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMode {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Role as the model backend expects it.
    pub fn model_role(&self) -> &str {
        map_role(&self.role)
    }
}

/// Payload of a `chat` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPayload {
    pub character: ChatCharacter,
    pub mode: ChatMode,
    pub subject: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatPayload {
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let payload: Self = serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("invalid chat payload: {e}")))?;

        if payload.messages.is_empty() {
            return Err(DomainError::validation(
                "chat payload requires at least one message to answer",
            ));
        }

        Ok(payload)
    }

    /// The final message, which is the turn being answered.
    pub fn current_turn(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Every message before the current turn.
    pub fn history(&self) -> &[ChatMessage] {
        match self.messages.split_last() {
            Some((_, history)) => history,
            None => &[],
        }
    }
}

/// Client role to model role: `assistant` becomes `model`, anything else is
/// passed through untouched.
pub fn map_role(role: &str) -> &str {
    match role {
        "assistant" => MODEL_ROLE,
        other => other,
    }
}
