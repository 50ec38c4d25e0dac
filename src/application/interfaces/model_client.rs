use async_trait::async_trait;

use crate::domain::{DomainError, ModelPrompt};

/// Sends a synthesized prompt to a generative model and returns its raw text.
///
/// Implementors own transport and vendor wire formats. Failures are reported
/// as [`DomainError::Upstream`] (with the backend status when one exists) or
/// [`DomainError::Configuration`] when the client cannot run at all.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String, DomainError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
