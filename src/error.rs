//! Request Errors
//!
//! Every failure the UI can hit ends up as an `ApiError`. The user only ever
//! sees "the request failed" plus whatever field messages could be found; the
//! variants exist for the developer console.

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        body: String,
        fields: FieldErrors,
    },

    /// A 2xx response whose body did not match the expected record
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The form could not be turned into a record, nothing was sent
    #[error("form input rejected")]
    Rejected(FieldErrors),

    #[error("invalid REST configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Build the error for a non-2xx response, parsing field messages from the body.
    pub fn from_status(status: u16, body: String) -> Self {
        let fields = FieldErrors::from_body(&body);
        ApiError::Status { status, body, fields }
    }

    /// Field-level messages to show the user (may be empty).
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Status { fields, .. } | ApiError::Rejected(fields) => fields.0.as_slice(),
            _ => &[],
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// One field-level message, keyed the way the backend keys them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field-level messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.message.as_str())
    }

    /// Extract messages from an error body.
    ///
    /// Accepts `{ "<field>": { "message": "..." }, ... }` as well as
    /// `[ { "message": "...", "path": "..." }, ... ]`. Anything else yields
    /// an empty list.
    pub fn from_body(body: &str) -> Self {
        let mut errors = FieldErrors::new();
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return errors;
        };
        match value {
            Value::Object(map) => {
                for (field, entry) in map {
                    if let Some(message) = message_of(&entry) {
                        errors.push(field, message);
                    }
                }
            }
            Value::Array(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if let Some(message) = message_of(entry) {
                        let field = entry
                            .get("path")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                            .unwrap_or_else(|| i.to_string());
                        errors.push(field, message);
                    }
                }
            }
            _ => {}
        }
        errors
    }
}

fn message_of(entry: &Value) -> Option<String> {
    entry.get("message").and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_body() {
        let body = r#"{"name":{"message":"Party Whig already exists."},"foundedYear":{"message":"Founded year is required."}}"#;
        let errors = FieldErrors::from_body(body);
        let messages: Vec<_> = errors.messages().collect();
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&"Party Whig already exists."));
        assert!(messages.contains(&"Founded year is required."));
    }

    #[test]
    fn test_array_body() {
        let body = r#"[{"message":"may not be null","path":"create.arg0.stateId"},{"message":"bad"}]"#;
        let errors = FieldErrors::from_body(body);
        assert_eq!(errors.0[0].field, "create.arg0.stateId");
        assert_eq!(errors.0[0].message, "may not be null");
        assert_eq!(errors.0[1].field, "1");
    }

    #[test]
    fn test_unparseable_body() {
        assert!(FieldErrors::from_body("").is_empty());
        assert!(FieldErrors::from_body("<html>Internal Server Error</html>").is_empty());
        assert!(FieldErrors::from_body(r#"{"name":"no message key"}"#).is_empty());
    }

    #[test]
    fn test_from_status_keeps_body() {
        let err = ApiError::from_status(404, r#"{"id":{"message":"Party does not exist."}}"#.into());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.field_errors()[0].message, "Party does not exist.");
        assert!(err.body().unwrap().contains("does not exist"));
    }
}
