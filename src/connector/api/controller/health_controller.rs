use std::sync::Arc;

use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::DomainError;

use super::super::error_response::ApiError;
use super::super::Container;

pub const SERVICE_NAME: &str = "TeacherBot Gemini Proxy";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub time: String,
}

impl HealthStatus {
    pub fn now() -> Self {
        Self {
            status: "ok",
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `/api/health`: static status payload for `GET`, 405 otherwise.
///
/// Responses carry the same fixed CORS header set as `/api/gemini`, so
/// `Access-Control-Allow-Methods` reads `POST, OPTIONS` here as well.
pub struct HealthController {
    container: Arc<Container>,
}

impl HealthController {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    pub fn handle(&self, method: Method, headers: &HeaderMap) -> Response {
        let response = if method == Method::GET {
            (StatusCode::OK, Json(HealthStatus::now())).into_response()
        } else {
            ApiError(DomainError::method_not_allowed(method.as_str(), "GET")).into_response()
        };

        self.container.cors().apply(headers, response)
    }
}
