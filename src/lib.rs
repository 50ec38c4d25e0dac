pub mod application;
pub mod connector;
pub mod domain;

pub use application::{GenerateResponseUseCase, ModelClient};

pub use connector::{
    router, ApiError, ConfigError, Container, CorsPolicy, GeminiClient, ProxyConfig,
    ScriptedModelClient,
};

pub use domain::{
    map_role, strip_fences, BundlePayload, ChatMessage, ChatPayload, DomainError, Endpoint,
    EndpointRequest, ModelPrompt, ModelTurn, NormalizedResponse, RequestEnvelope,
};
