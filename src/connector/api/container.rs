use std::sync::Arc;

use tracing::debug;

use crate::application::{GenerateResponseUseCase, ModelClient};
use crate::connector::adapter::GeminiClient;

use super::config::ProxyConfig;
use super::cors::CorsPolicy;

/// Everything a request needs, built once at startup and shared read-only.
pub struct Container {
    cors: CorsPolicy,
    model_client: Arc<dyn ModelClient>,
}

impl Container {
    /// Wire the Gemini client from configuration.
    pub fn new(config: ProxyConfig) -> Self {
        debug!(
            "Using Gemini model {} at {} (api key {})",
            config.model,
            config.base_url,
            if config.api_key.is_some() { "set" } else { "missing" }
        );
        let client = GeminiClient::new(
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        );
        Self::with_model_client(config, Arc::new(client))
    }

    /// Wire an arbitrary model client, e.g. a scripted one in tests.
    pub fn with_model_client(config: ProxyConfig, model_client: Arc<dyn ModelClient>) -> Self {
        let cors = CorsPolicy::new(&config.allowed_origins);
        Self { cors, model_client }
    }

    pub fn cors(&self) -> &CorsPolicy {
        &self.cors
    }

    pub fn generate_use_case(&self) -> GenerateResponseUseCase {
        GenerateResponseUseCase::new(Arc::clone(&self.model_client))
    }
}
