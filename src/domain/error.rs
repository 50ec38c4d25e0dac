use thiserror::Error;

/// Methods accepted by the generation endpoint, as advertised in `Allow`.
pub const GENERATE_ALLOWED_METHODS: &str = "POST, OPTIONS";

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed {
        method: String,
        allowed: &'static str,
    },

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model backend failed. `status` is the upstream HTTP status when the
    /// backend answered at all.
    #[error("Upstream error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Normalization error: {0}")]
    Normalization(String),
}

impl DomainError {
    pub fn method_not_allowed(method: impl Into<String>, allowed: &'static str) -> Self {
        Self::MethodNotAllowed {
            method: method.into(),
            allowed,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: msg.into(),
        }
    }

    pub fn normalization(msg: impl Into<String>) -> Self {
        Self::Normalization(msg.into())
    }

    /// HTTP status this error is reported with.
    ///
    /// Upstream failures mirror the backend's status when it is an error
    /// status; otherwise (transport failure, odd 1xx/3xx) they become 502.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed { .. } => 405,
            Self::Validation(_) => 400,
            Self::Configuration(_) => 500,
            Self::Upstream { status, .. } => match status {
                Some(code) if (400..=599).contains(code) => *code,
                _ => 502,
            },
            Self::Normalization(_) => 500,
        }
    }

    /// Short summary used as the `error` field of the response body.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed { .. } => "Method Not Allowed",
            Self::Validation(_) => "Invalid request",
            Self::Configuration(_) => "Server misconfigured",
            Self::Upstream { .. } => "upstream model call failed",
            Self::Normalization(_) => "model reply was not valid JSON",
        }
    }

    /// Specific cause, used as the `details` field of the response body.
    pub fn details(&self) -> String {
        match self {
            Self::MethodNotAllowed { method, allowed } => {
                format!("{method} is not supported; use {allowed}")
            }
            Self::Validation(msg)
            | Self::Configuration(msg)
            | Self::Normalization(msg) => msg.clone(),
            Self::Upstream { message, .. } => message.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    pub fn is_normalization(&self) -> bool {
        matches!(self, Self::Normalization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_mirrors_error_status() {
        assert_eq!(DomainError::upstream(Some(429), "quota").status_code(), 429);
        assert_eq!(DomainError::upstream(Some(503), "down").status_code(), 503);
    }

    #[test]
    fn upstream_without_error_status_is_bad_gateway() {
        assert_eq!(DomainError::upstream(None, "refused").status_code(), 502);
        assert_eq!(DomainError::upstream(Some(200), "empty").status_code(), 502);
    }

    #[test]
    fn summaries_distinguish_upstream_from_parse_failure() {
        let upstream = DomainError::upstream(None, "x");
        let parse = DomainError::normalization("x");
        assert_ne!(upstream.summary(), parse.summary());
        assert_eq!(parse.status_code(), 500);
    }

    #[test]
    fn method_not_allowed_details_list_supported_methods() {
        let err = DomainError::method_not_allowed("GET", GENERATE_ALLOWED_METHODS);
        assert_eq!(err.status_code(), 405);
        assert!(err.details().contains("POST, OPTIONS"));
    }
}
