use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::ModelClient;
use crate::domain::{normalize, synthesize, DomainError, NormalizedResponse, RequestEnvelope};

/// Runs one request through dispatch, synthesis, the model call and
/// normalization.
pub struct GenerateResponseUseCase {
    model_client: Arc<dyn ModelClient>,
}

impl GenerateResponseUseCase {
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    pub async fn execute(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<NormalizedResponse, DomainError> {
        let request = envelope.dispatch()?;
        let endpoint = request.endpoint();
        let prompt = synthesize(&request)?;

        let start_time = Instant::now();
        let raw = match self.model_client.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(%endpoint, model = self.model_client.model_name(), "model call failed: {e}");
                return Err(e);
            }
        };

        info!(
            %endpoint,
            model = self.model_client.model_name(),
            reply_len = raw.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "model replied"
        );

        normalize(endpoint, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ScriptedModelClient;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> RequestEnvelope {
        RequestEnvelope::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn chat_returns_model_text_verbatim() {
        let client = Arc::new(ScriptedModelClient::replying("  Energy is conserved.\n"));
        let use_case = GenerateResponseUseCase::new(client.clone());

        let response = use_case
            .execute(envelope(json!({
                "endpoint": "chat",
                "payload": {
                    "character": {"name": "Noether", "prompt": "a mathematician"},
                    "mode": {"label": "Tutor"},
                    "subject": "physics",
                    "messages": [
                        {"role": "user", "content": "hi"},
                        {"role": "assistant", "content": "hello"},
                        {"role": "user", "content": "why is energy conserved?"}
                    ]
                }
            })))
            .await
            .unwrap();

        assert_eq!(response, NormalizedResponse::reply("  Energy is conserved.\n"));

        let prompts = client.received();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].history().len(), 2);
        assert_eq!(prompts[0].history()[1].role, "model");
    }

    #[tokio::test]
    async fn bundle_parses_fenced_reply() {
        let client = Arc::new(ScriptedModelClient::replying(
            "```json\n{\"title\":\"Algebra Basics\"}\n```",
        ));
        let use_case = GenerateResponseUseCase::new(client);

        let response = use_case
            .execute(envelope(json!({
                "endpoint": "bundle",
                "payload": {"subject": "algebra", "grade": "8", "character": {"name": "Ada"}}
            })))
            .await
            .unwrap();

        assert_eq!(response.into_json(), json!({"title": "Algebra Basics"}));
    }

    #[tokio::test]
    async fn validation_failures_skip_the_model() {
        let client = Arc::new(ScriptedModelClient::replying("unused"));
        let use_case = GenerateResponseUseCase::new(client.clone());

        let err = use_case
            .execute(envelope(json!({"endpoint": "quiz", "payload": {}})))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(client.received().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_propagated_unchanged() {
        let client = Arc::new(ScriptedModelClient::failing(DomainError::upstream(
            Some(429),
            "quota exhausted",
        )));
        let use_case = GenerateResponseUseCase::new(client);

        let err = use_case
            .execute(envelope(json!({
                "endpoint": "bundle",
                "payload": {"subject": "algebra", "grade": 8, "character": {"name": "Ada"}}
            })))
            .await
            .unwrap_err();

        assert!(err.is_upstream());
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.details(), "quota exhausted");
    }
}
