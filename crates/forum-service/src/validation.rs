//! Request payload validation
//!
//! Payloads arrive as loose JSON. They are deserialized into a request DTO
//! (unknown keys rejected) and then checked against the DTO's `validator`
//! rules. Any failure is an `INVARIANT` error.

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::use_cases::{ServiceError, ServiceResult};

/// Deserialize and validate a request payload
///
/// # Errors
/// Returns `ServiceError::Invariant` if the payload has the wrong shape or
/// breaks a validation rule
pub fn validate_payload<T>(payload: serde_json::Value) -> ServiceResult<T>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_value(payload)
        .map_err(|e| ServiceError::invariant(format!("invalid payload: {e}")))?;

    request
        .validate()
        .map_err(|e| ServiceError::invariant(describe(&e)))?;

    Ok(request)
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("\"{field}\" {reason}")
        })
        .collect();
    fields.sort();
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{AddCommentRequest, AddThreadRequest};
    use serde_json::json;

    #[test]
    fn test_accepts_valid_payload() {
        let request: AddThreadRequest =
            validate_payload(json!({ "title": "a thread", "body": "its body" })).unwrap();

        assert_eq!(request.title, "a thread");
        assert_eq!(request.body, "its body");
    }

    #[test]
    fn test_rejects_missing_field() {
        let err = validate_payload::<AddThreadRequest>(json!({ "title": "a thread" })).unwrap_err();

        assert_eq!(err.error_code(), "INVARIANT");
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let err = validate_payload::<AddCommentRequest>(json!({ "content": 123 })).unwrap_err();
        assert_eq!(err.error_code(), "INVARIANT");
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = validate_payload::<AddCommentRequest>(json!({
            "content": "hello",
            "owner": "user-999",
        }))
        .unwrap_err();
        assert_eq!(err.error_code(), "INVARIANT");
    }

    #[test]
    fn test_rejects_empty_string() {
        let err =
            validate_payload::<AddThreadRequest>(json!({ "title": "", "body": "" })).unwrap_err();

        assert_eq!(err.error_code(), "INVARIANT");
        assert_eq!(
            err.to_string(),
            "\"body\" must not be empty, \"title\" must not be empty"
        );
    }

    #[test]
    fn test_rejects_non_object() {
        let err = validate_payload::<AddCommentRequest>(json!("hello")).unwrap_err();
        assert_eq!(err.error_code(), "INVARIANT");
    }
}
