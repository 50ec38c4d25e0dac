use serde::Serialize;
use serde_json::Value;

/// Body returned to the caller on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedResponse {
    Reply { reply: String },
    Document(Value),
}

impl NormalizedResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Reply { reply: text.into() }
    }

    pub fn into_json(self) -> Value {
        match self {
            Self::Reply { reply } => serde_json::json!({ "reply": reply }),
            Self::Document(value) => value,
        }
    }
}
