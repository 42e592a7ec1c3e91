//! Remote operation table

use mailvan_domain::constants::{GET_LISTS_COMMAND, SUBSCRIBE_COMMAND, UNSUBSCRIBE_COMMAND};
use mailvan_domain::{MailvanError, Result};
use reqwest::Method;

use crate::http::RetryPolicy;

const SUBSCRIBERS_PATH: &str = "/subscribers.html";
const DELIVERIES_PATH: &str = "/deliveries.html";

/// Where and how a command is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// HTTP method
    pub method: Method,
    /// Path relative to the configured base URL
    pub path: &'static str,
    /// Value of the `action` form field
    pub action: &'static str,
    /// Whether resending after an ambiguous failure is harmless
    pub idempotent: bool,
}

impl Operation {
    const fn post(path: &'static str, action: &'static str, idempotent: bool) -> Self {
        Self { method: Method::POST, path, action, idempotent }
    }

    /// Retry policy for requests carrying this operation.
    pub const fn retry_policy(&self) -> RetryPolicy {
        if self.idempotent {
            RetryPolicy::Idempotent
        } else {
            RetryPolicy::ConnectOnly
        }
    }
}

/// Resolve a command name to its operation.
///
/// # Errors
/// Returns `MailvanError::InvalidInput` for names the service does not
/// offer.
pub fn lookup(command: &str) -> Result<Operation> {
    match command {
        SUBSCRIBE_COMMAND => Ok(Operation::post(SUBSCRIBERS_PATH, "create", false)),
        UNSUBSCRIBE_COMMAND => Ok(Operation::post(SUBSCRIBERS_PATH, "unlink", false)),
        GET_LISTS_COMMAND => Ok(Operation::post(DELIVERIES_PATH, "list", true)),
        other => Err(MailvanError::InvalidInput(format!("unknown SmartResponder command '{other}'"))),
    }
}
