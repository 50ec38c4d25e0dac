use axum::http::header::ALLOW;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// JSON body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// HTTP rendering of a [`DomainError`].
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let details = self.0.details();
        let body = Json(ErrorResponse {
            error: self.0.summary().to_string(),
            details: (!details.is_empty()).then_some(details),
        });

        let mut response = (status, body).into_response();
        if let DomainError::MethodNotAllowed { allowed, .. } = &self.0 {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(*allowed));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError(DomainError::validation("missing endpoint")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(ALLOW).is_none());
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response =
            ApiError(DomainError::method_not_allowed("GET", "POST, OPTIONS")).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "POST, OPTIONS");
    }

    #[test]
    fn upstream_status_is_mirrored() {
        let response = ApiError(DomainError::upstream(Some(403), "forbidden")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
