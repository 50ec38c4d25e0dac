use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::DomainError;

/// Audience level; clients send either `"8"` or `8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    Text(String),
    Number(Number),
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Text(s) => write!(f, "{}", s),
            Grade::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleCharacter {
    pub name: String,
}

/// Payload of a `bundle` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlePayload {
    pub subject: String,
    pub grade: Grade,
    pub character: BundleCharacter,
    /// Shape hint forwarded to the model. Never checked against the reply.
    #[serde(default)]
    pub schema: Option<Value>,
}

impl BundlePayload {
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("invalid bundle payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grade_accepts_string_or_number() {
        let text = BundlePayload::from_value(json!({
            "subject": "algebra", "grade": "8", "character": {"name": "Ada"}
        }))
        .unwrap();
        assert_eq!(text.grade.to_string(), "8");

        let number = BundlePayload::from_value(json!({
            "subject": "algebra", "grade": 8, "character": {"name": "Ada"}
        }))
        .unwrap();
        assert_eq!(number.grade.to_string(), "8");
    }

    #[test]
    fn schema_is_optional() {
        let bundle = BundlePayload::from_value(json!({
            "subject": "algebra", "grade": "8", "character": {"name": "Ada"}, "schema": null
        }))
        .unwrap();
        assert!(bundle.schema.is_none());
    }

    #[test]
    fn grade_rejects_other_types() {
        let err = BundlePayload::from_value(json!({
            "subject": "algebra", "grade": ["8"], "character": {"name": "Ada"}
        }))
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.details().contains("bundle payload"));
    }
}
