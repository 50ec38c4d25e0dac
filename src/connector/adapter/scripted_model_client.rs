use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ModelClient;
use crate::domain::{DomainError, ModelPrompt};

/// In-process [`ModelClient`] that returns a fixed outcome and records every
/// prompt it receives. Used to drive the pipeline without a network.
pub struct ScriptedModelClient {
    outcome: Result<String, DomainError>,
    received: Mutex<Vec<ModelPrompt>>,
}

impl ScriptedModelClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            outcome: Err(error),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn received(&self) -> Vec<ModelPrompt> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String, DomainError> {
        match self.received.lock() {
            Ok(mut guard) => guard.push(prompt.clone()),
            Err(poisoned) => poisoned.into_inner().push(prompt.clone()),
        }
        self.outcome.clone()
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
