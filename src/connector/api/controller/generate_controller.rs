use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use crate::domain::{DomainError, NormalizedResponse, RequestEnvelope, GENERATE_ALLOWED_METHODS};

use super::super::error_response::ApiError;
use super::super::Container;

/// Largest request body read for a generation request.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// `/api/gemini`: CORS gate, method check, envelope validation, then the
/// generation pipeline. Every exit path carries the CORS headers.
///
/// The body is only read for `POST`; preflights and rejected methods never
/// touch it, whatever its size or content.
pub struct GenerateController {
    container: Arc<Container>,
}

impl GenerateController {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    pub async fn handle(&self, method: Method, headers: &HeaderMap, body: Body) -> Response {
        let cors = self.container.cors();

        if method == Method::OPTIONS {
            return cors.preflight(headers);
        }

        let response = match self.generate(&method, body).await {
            Ok(normalized) => {
                info!("request completed");
                (StatusCode::OK, Json(normalized.into_json())).into_response()
            }
            Err(e) => {
                warn!(status = e.status_code(), "request failed: {e}");
                ApiError(e).into_response()
            }
        };

        cors.apply(headers, response)
    }

    async fn generate(
        &self,
        method: &Method,
        body: Body,
    ) -> Result<NormalizedResponse, DomainError> {
        if *method != Method::POST {
            return Err(DomainError::method_not_allowed(
                method.as_str(),
                GENERATE_ALLOWED_METHODS,
            ));
        }

        let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| {
                DomainError::validation(format!(
                    "request body could not be read (limit {MAX_BODY_BYTES} bytes): {e}"
                ))
            })?;
        let envelope = RequestEnvelope::from_slice(&body)?;
        self.container.generate_use_case().execute(envelope).await
    }
}
