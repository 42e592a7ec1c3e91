//! Failure response translation

use mailvan_domain::constants::{ERROR_CODE_FIELD, ERROR_FIELD, ERROR_MESSAGE_FIELD};
use mailvan_domain::{MailvanError, RawResponse, Result, ServiceError};
use serde_json::Value;

/// Build the typed error carried by a failure response.
///
/// Only call this for responses the classifier flagged. `error.message`
/// must be a string and `error.code` an integer (or an integer-valued
/// string).
///
/// # Errors
/// Returns `MailvanError::MalformedResponse` when the `error` object or
/// either of its fields is missing or mistyped.
pub fn translate(service: &str, response: &RawResponse) -> Result<ServiceError> {
    let error = match response.get(ERROR_FIELD) {
        Some(Value::Object(error)) => error,
        Some(other) => {
            return Err(MailvanError::MalformedResponse(format!(
                "failure response has non-object '{ERROR_FIELD}': {other}"
            )))
        }
        None => {
            return Err(MailvanError::MalformedResponse(format!(
                "failure response has no '{ERROR_FIELD}' object"
            )))
        }
    };

    let message = match error.get(ERROR_MESSAGE_FIELD) {
        Some(Value::String(message)) => message.clone(),
        _ => {
            return Err(MailvanError::MalformedResponse(format!(
                "failure response is missing '{ERROR_FIELD}.{ERROR_MESSAGE_FIELD}'"
            )))
        }
    };

    let code = error.get(ERROR_CODE_FIELD).and_then(error_code).ok_or_else(|| {
        MailvanError::MalformedResponse(format!(
            "failure response is missing an integer '{ERROR_FIELD}.{ERROR_CODE_FIELD}'"
        ))
    })?;

    Ok(ServiceError::new(service, message, code))
}

fn error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
