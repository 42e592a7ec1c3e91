//! Subscriber types
//!
//! The person being added to or removed from a mailing list.

use serde::{Deserialize, Serialize};

use crate::errors::{MailvanError, Result};

/// Subscriber identity sent to the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    email: String,
    first_name: String,
    last_name: String,
}

impl User {
    /// Create a subscriber.
    ///
    /// Names may be empty; the email must be non-empty and contain `@`.
    ///
    /// # Errors
    /// Returns `MailvanError::InvalidInput` for an unusable email.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(MailvanError::InvalidInput("email must not be empty".into()));
        }
        if !email.contains('@') {
            return Err(MailvanError::InvalidInput(format!("email '{email}' is missing '@'")));
        }

        Ok(Self { email, first_name: first_name.into(), last_name: last_name.into() })
    }

    /// Validated email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Given name, possibly empty
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name, possibly empty
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}
