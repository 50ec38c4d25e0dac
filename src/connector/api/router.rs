use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::any;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use super::container::Container;
use super::controller::{GenerateController, HealthController};

pub const GENERATE_PATH: &str = "/api/gemini";
pub const HEALTH_PATH: &str = "/api/health";

/// HTTP surface of the proxy. Both routes accept any method so that
/// rejections go through the controllers and keep their CORS headers. The
/// generation body is handed over unread so no extractor limit can answer
/// first.
pub fn router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route(GENERATE_PATH, any(generate))
        .route(HEALTH_PATH, any(health))
        .with_state(container)
}

async fn generate(
    State(container): State<Arc<Container>>,
    method: Method,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let span = info_span!(
        "generate",
        request_id = %Uuid::new_v4(),
        method = %method
    );
    GenerateController::new(container)
        .handle(method, &headers, body)
        .instrument(span)
        .await
}

async fn health(
    State(container): State<Arc<Container>>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    HealthController::new(container).handle(method, &headers)
}
