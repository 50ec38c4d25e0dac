use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

const ALLOW_METHODS: &str = "POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const PREFLIGHT_MAX_AGE_SECS: &str = "86400";

/// Cross-origin header policy for every response the proxy emits.
///
/// The allowed origin is the request's `Origin` when it is on the allow-list,
/// else the first configured origin, else `*` when nothing is configured.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    allowed_origins: Vec<HeaderValue>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: &[String]) -> Self {
        let allowed_origins = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring allowed origin {origin:?}: not a valid header value");
                    None
                }
            })
            .collect();
        Self { allowed_origins }
    }

    pub fn allow_origin(&self, request_origin: Option<&HeaderValue>) -> HeaderValue {
        if let Some(origin) = request_origin {
            if self.allowed_origins.iter().any(|allowed| allowed == origin) {
                return origin.clone();
            }
        }

        self.allowed_origins
            .first()
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("*"))
    }

    pub fn headers(&self, request_headers: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin(request_headers.get(ORIGIN)),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        if !self.allowed_origins.is_empty() {
            headers.insert(VARY, HeaderValue::from_static("Origin"));
        }
        headers
    }

    /// Attach the CORS headers to an already-built response.
    pub fn apply(&self, request_headers: &HeaderMap, mut response: Response) -> Response {
        response.headers_mut().extend(self.headers(request_headers));
        response
    }

    /// Answer an `OPTIONS` request without looking at its body.
    pub fn preflight(&self, request_headers: &HeaderMap) -> Response {
        let mut headers = self.headers(request_headers);
        headers.insert(
            ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS),
        );
        (StatusCode::NO_CONTENT, headers).into_response()
    }
}
