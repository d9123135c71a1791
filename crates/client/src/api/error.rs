//! Error types for the backend API client, including the error-body
//! normalizer.
//!
//! The backend reports failures in three shapes inside a non-2xx body:
//! a plain string `detail`, an array of field-validation errors, or a
//! structured fault object. [`normalize_error`] folds all of them (plus
//! bodies that do not parse at all) into one displayable string.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when talking to the Raterly backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect failure, timeout, bad TLS, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `message` is the
    /// normalized display string derived from the response body.
    #[error("{message}")]
    Status {
        /// Original response status.
        status: StatusCode,
        /// Normalized, user-displayable message.
        message: String,
    },
}

impl ApiError {
    /// Whether this error is a 401 from the backend.
    ///
    /// Callers use this to suggest re-authentication instead of retrying.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: StatusCode::UNAUTHORIZED,
                ..
            }
        )
    }
}

/// Failed-response envelope.
///
/// Both fields are optional: the backend sometimes sends `{detail: ...}`,
/// sometimes `{message: ...}`, and occasionally an empty object.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
    #[serde(default)]
    message: Option<String>,
}

/// The three known shapes of the `detail` field.
///
/// Anything else (a number, a boolean) fails the envelope parse and takes
/// the `Request failed (<status>)` fallback path in [`normalize_error`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    /// Plain string error, returned verbatim.
    Message(String),
    /// Field-validation errors; each element contributes its `msg` field,
    /// or its full serialization when it has none.
    Validation(Vec<Value>),
    /// Structured fault object; contributes its `message` field, or its
    /// full serialization when it has none.
    Fault(Map<String, Value>),
}

/// Fold a failed response body into one displayable string.
///
/// Priority order:
/// 1. Unparseable body -> `"Request failed (<status code>)"`.
/// 2. No `detail` field -> the `message` field, else `"Request failed"`.
/// 3. String `detail` -> returned verbatim.
/// 4. Array `detail` -> per-element `msg` (or full serialization), joined
///    with `"; "`.
/// 5. Object `detail` -> its `message` field (or full serialization).
#[must_use]
pub fn normalize_error(status: StatusCode, body: &str) -> String {
    let Ok(envelope) = serde_json::from_str::<ErrorBody>(body) else {
        return format!("Request failed ({})", status.as_u16());
    };

    match envelope.detail {
        None => envelope
            .message
            .unwrap_or_else(|| "Request failed".to_string()),
        Some(ErrorDetail::Message(text)) => text,
        Some(ErrorDetail::Validation(problems)) => problems
            .iter()
            .map(render_validation_problem)
            .collect::<Vec<_>>()
            .join("; "),
        Some(ErrorDetail::Fault(fields)) => {
            let message = fields
                .get("message")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned);
            message.unwrap_or_else(|| Value::Object(fields).to_string())
        }
    }
}

/// One element of a validation-error array: its `msg` field if it carries
/// one, else the whole element serialized.
fn render_validation_problem(problem: &Value) -> String {
    problem
        .get("msg")
        .and_then(Value::as_str)
        .map_or_else(|| problem.to_string(), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_returned_verbatim() {
        let message = normalize_error(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Invalid credentials"}"#,
        );
        assert_eq!(message, "Invalid credentials");
    }

    #[test]
    fn test_validation_array_joins_msg_fields() {
        let body = r#"{"detail": [{"msg": "a"}, {"msg": "b"}]}"#;
        let message = normalize_error(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(message, "a; b");
    }

    #[test]
    fn test_validation_element_without_msg_is_serialized() {
        let body = r#"{"detail": [{"loc": ["body", "password"]}]}"#;
        let message = normalize_error(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(message, r#"{"loc":["body","password"]}"#);
    }

    #[test]
    fn test_fault_object_uses_message_field() {
        let body = r#"{"detail": {"message": "y", "code": 17}}"#;
        let message = normalize_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(message, "y");
    }

    #[test]
    fn test_empty_fault_object_is_serialized() {
        let message = normalize_error(StatusCode::BAD_REQUEST, r#"{"detail": {}}"#);
        assert_eq!(message, "{}");
    }

    #[test]
    fn test_missing_detail_falls_back_to_message() {
        let message = normalize_error(StatusCode::BAD_GATEWAY, r#"{"message": "m"}"#);
        assert_eq!(message, "m");
    }

    #[test]
    fn test_empty_object_falls_back_to_literal() {
        let message = normalize_error(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert_eq!(message, "Request failed");
    }

    #[test]
    fn test_unparseable_body_reports_status() {
        let message = normalize_error(StatusCode::BAD_GATEWAY, "<html>upstream died</html>");
        assert_eq!(message, "Request failed (502)");
    }

    #[test]
    fn test_unknown_detail_shape_reports_status() {
        // A numeric detail matches none of the known shapes.
        let message = normalize_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": 42}"#);
        assert_eq!(message, "Request failed (500)");
    }

    #[test]
    fn test_api_error_display_is_normalized_message() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }
}
