//! Conversions from external infrastructure errors into domain errors.

use mailvan_domain::MailvanError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MailvanError);

impl From<InfraError> for MailvanError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MailvanError> for InfraError {
    fn from(value: MailvanError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMailvanError {
    fn into_mailvan(self) -> MailvanError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MailvanError */
/* -------------------------------------------------------------------------- */

impl IntoMailvanError for HttpError {
    fn into_mailvan(self) -> MailvanError {
        if self.is_timeout() {
            return MailvanError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MailvanError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return MailvanError::Internal(format!("failed to build HTTP request: {self}"));
        }

        if self.is_decode() {
            return MailvanError::MalformedResponse(format!("undecodable response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => MailvanError::Auth(message),
                _ => MailvanError::Network(message),
            };
        }

        // URL omitted from the message.
        MailvanError::Network(self.without_url().to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_mailvan())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → MailvanError */
/* -------------------------------------------------------------------------- */

impl IntoMailvanError for UrlError {
    fn into_mailvan(self) -> MailvanError {
        MailvanError::Config(format!("invalid base URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_mailvan())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
