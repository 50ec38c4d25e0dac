use std::str::FromStr;

use serde_json::Value;

use super::{BundlePayload, ChatPayload};
use crate::domain::DomainError;

/// Request variants the proxy understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Chat,
    Bundle,
}

impl Endpoint {
    pub const ACCEPTED: &'static str = "\"chat\" or \"bundle\"";

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Chat => "chat",
            Endpoint::Bundle => "bundle",
        }
    }
}

impl FromStr for Endpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Endpoint::Chat),
            "bundle" => Ok(Endpoint::Bundle),
            other => Err(DomainError::validation(format!(
                "unknown endpoint \"{}\"; use {}",
                other,
                Self::ACCEPTED
            ))),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level inbound body: `{endpoint, payload}`.
///
/// Only the outer shape is checked here. The payload stays untyped until
/// [`RequestEnvelope::dispatch`] knows which schema applies.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    endpoint: String,
    payload: Value,
}

impl RequestEnvelope {
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            DomainError::validation(format!("request body is not valid JSON: {e}"))
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let Value::Object(mut fields) = value else {
            return Err(DomainError::validation(
                "request body must be a JSON object with \"endpoint\" and \"payload\"",
            ));
        };

        // Blank tags count as missing; anything else reaches dispatch verbatim.
        let endpoint = fields
            .get("endpoint")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| DomainError::validation("missing \"endpoint\" in request body"))?;

        let payload = fields
            .remove("payload")
            .filter(|p| !p.is_null())
            .ok_or_else(|| DomainError::validation("missing \"payload\" in request body"))?;

        Ok(Self { endpoint, payload })
    }

    /// Resolve the discriminator and decode the payload into its typed schema.
    pub fn dispatch(self) -> Result<EndpointRequest, DomainError> {
        match self.endpoint.parse::<Endpoint>()? {
            Endpoint::Chat => ChatPayload::from_value(self.payload).map(EndpointRequest::Chat),
            Endpoint::Bundle => {
                BundlePayload::from_value(self.payload).map(EndpointRequest::Bundle)
            }
        }
    }
}

/// A validated request, one variant per [`Endpoint`].
#[derive(Debug, Clone)]
pub enum EndpointRequest {
    Chat(ChatPayload),
    Bundle(BundlePayload),
}

impl EndpointRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            EndpointRequest::Chat(_) => Endpoint::Chat,
            EndpointRequest::Bundle(_) => Endpoint::Bundle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_from_str() {
        assert_eq!("chat".parse::<Endpoint>().unwrap(), Endpoint::Chat);
        assert_eq!("bundle".parse::<Endpoint>().unwrap(), Endpoint::Bundle);
        assert!("Chat".parse::<Endpoint>().is_err());
    }

    #[test]
    fn unknown_endpoint_names_accepted_values() {
        let err = "quiz".parse::<Endpoint>().unwrap_err();
        assert!(err.is_validation());
        let details = err.details();
        assert!(details.contains("chat"));
        assert!(details.contains("bundle"));
    }

    #[test]
    fn envelope_rejects_non_json_body() {
        let err = RequestEnvelope::from_slice(b"not json").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn envelope_rejects_non_object_body() {
        let err = RequestEnvelope::from_value(json!(["chat"])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn envelope_requires_endpoint() {
        let err = RequestEnvelope::from_value(json!({"payload": {}})).unwrap_err();
        assert!(err.details().contains("endpoint"));

        let err = RequestEnvelope::from_value(json!({"endpoint": "  ", "payload": {}}))
            .unwrap_err();
        assert!(err.details().contains("endpoint"));

        let err = RequestEnvelope::from_value(json!({"endpoint": 3, "payload": {}}))
            .unwrap_err();
        assert!(err.details().contains("endpoint"));
    }

    #[test]
    fn envelope_requires_payload() {
        let err = RequestEnvelope::from_value(json!({"endpoint": "chat"})).unwrap_err();
        assert!(err.details().contains("payload"));

        let err =
            RequestEnvelope::from_value(json!({"endpoint": "chat", "payload": null})).unwrap_err();
        assert!(err.details().contains("payload"));
    }

    #[test]
    fn envelope_does_not_interpret_payload() {
        let envelope =
            RequestEnvelope::from_value(json!({"endpoint": "quiz", "payload": 42})).unwrap();
        let err = envelope.dispatch().unwrap_err();
        assert!(err.details().contains("unknown endpoint \"quiz\""));
    }

    #[test]
    fn dispatch_rejects_padded_endpoint() {
        for tag in [" chat ", "chat\n", "\tbundle"] {
            let envelope =
                RequestEnvelope::from_value(json!({"endpoint": tag, "payload": {}})).unwrap();
            let err = envelope.dispatch().unwrap_err();
            assert!(err.is_validation());
            assert!(err.details().contains("unknown endpoint"), "{tag:?}");
        }
    }

    #[test]
    fn dispatch_rejects_unknown_endpoint() {
        let envelope =
            RequestEnvelope::from_value(json!({"endpoint": "quiz", "payload": {}})).unwrap();
        let err = envelope.dispatch().unwrap_err();
        assert!(err.is_validation());
        assert!(err.details().contains("\"chat\" or \"bundle\""));
    }

    #[test]
    fn dispatch_selects_bundle_schema() {
        let envelope = RequestEnvelope::from_value(json!({
            "endpoint": "bundle",
            "payload": {"subject": "algebra", "grade": "8", "character": {"name": "Ada"}}
        }))
        .unwrap();
        let request = envelope.dispatch().unwrap();
        assert_eq!(request.endpoint(), Endpoint::Bundle);
    }

    #[test]
    fn dispatch_reports_payload_schema_errors() {
        let envelope = RequestEnvelope::from_value(json!({
            "endpoint": "chat",
            "payload": {"subject": "history"}
        }))
        .unwrap();
        let err = envelope.dispatch().unwrap_err();
        assert!(err.is_validation());
        assert!(err.details().contains("chat payload"));
    }
}
