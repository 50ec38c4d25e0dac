use serde::{Deserialize, Serialize};

/// One prior conversational turn, already in model-side role terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTurn {
    pub role: String,
    pub text: String,
}

impl ModelTurn {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            text: text.into(),
        }
    }
}

/// What the model client receives: an instruction plus optional history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPrompt {
    instruction: String,
    history: Vec<ModelTurn>,
}

impl ModelPrompt {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ModelTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn history(&self) -> &[ModelTurn] {
        &self.history
    }
}
