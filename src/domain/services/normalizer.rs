use serde_json::Value;
use tracing::warn;

use super::strip_fences;
use crate::domain::{DomainError, Endpoint, NormalizedResponse};

/// Shape raw model text into the response the endpoint promised.
pub fn normalize(endpoint: Endpoint, raw: String) -> Result<NormalizedResponse, DomainError> {
    match endpoint {
        Endpoint::Chat => Ok(NormalizedResponse::reply(raw)),
        Endpoint::Bundle => parse_bundle(&raw).map(NormalizedResponse::Document),
    }
}

/// Strip fences and parse what remains as JSON. The raw text is never
/// returned in place of a parsed value.
pub fn parse_bundle(raw: &str) -> Result<Value, DomainError> {
    let stripped = strip_fences(raw);
    serde_json::from_str(&stripped).map_err(|e| {
        warn!(reply_len = raw.len(), "model reply is not valid JSON: {e}");
        DomainError::normalization(format!("failed to parse model reply as JSON: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_reply_is_passed_through() {
        let text = "  ```json\n{}\n```  raw ".to_string();
        let response = normalize(Endpoint::Chat, text.clone()).unwrap();
        assert_eq!(response, NormalizedResponse::reply(text));
    }

    #[test]
    fn fenced_and_plain_json_parse_identically() {
        let expected = json!({"title": "Algebra Basics", "units": [1, 2]});
        let body = r#"{"title": "Algebra Basics", "units": [1, 2]}"#;

        for raw in [
            format!("```json\n{body}\n```"),
            format!("```\n{body}\n```"),
            body.to_string(),
        ] {
            assert_eq!(parse_bundle(&raw).unwrap(), expected);
        }
    }

    #[test]
    fn invalid_json_is_a_normalization_error() {
        let err = normalize(Endpoint::Bundle, "Sure! Here is your bundle.".to_string())
            .unwrap_err();
        assert!(err.is_normalization());
        assert!(err.details().contains("failed to parse"));
    }

    #[test]
    fn empty_reply_is_a_normalization_error() {
        assert!(parse_bundle("```json\n```").unwrap_err().is_normalization());
    }
}
