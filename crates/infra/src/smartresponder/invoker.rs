//! HTTP-backed `RemoteInvoker` for SmartResponder

use async_trait::async_trait;
use mailvan_core::RemoteInvoker;
use mailvan_domain::{Command, MailvanError, RawResponse, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::encoding::encode_form;
use super::operations;
use crate::errors::InfraError;
use crate::http::HttpClient;

const MAX_BODY_IN_ERROR: usize = 512;

/// Sends commands to the SmartResponder API as form posts.
///
/// Retries happen inside [`HttpClient`] under the operation's retry policy:
/// writes are only resent when the connection was never made. This type
/// maps whatever comes back
/// into a raw response or a transport error. Business failures (`result`
/// equal to zero) are returned as ordinary responses for the executor to
/// classify.
pub struct HttpRemoteInvoker {
    http: HttpClient,
    base_url: String,
}

impl HttpRemoteInvoker {
    /// `base_url` must already be validated; a trailing slash is ignored.
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RemoteInvoker for HttpRemoteInvoker {
    #[instrument(skip(self, command), fields(command = %command.name()))]
    async fn invoke(&self, command: &Command) -> Result<RawResponse> {
        let operation = operations::lookup(command.name())?;
        let form = encode_form(operation.action, command.parameters());
        let url = self.endpoint(operation.path);

        debug!(path = operation.path, action = operation.action, "dispatching command");
        let request = self.http.request(operation.method.clone(), &url).form(&form);
        let response = self.http.send_with_policy(request, operation.retry_policy()).await?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            let infra: InfraError = err.into();
            MailvanError::from(infra)
        })?;

        if !status.is_success() {
            warn!(%status, path = operation.path, "SmartResponder returned an HTTP error");
            return Err(map_status_error(status, operation.path, &body));
        }

        debug!(%status, "command response received");
        parse_body(&body)
    }
}

fn map_status_error(status: StatusCode, path: &str, body: &str) -> MailvanError {
    let body = truncate(body.trim(), MAX_BODY_IN_ERROR);
    let message = if body.is_empty() {
        format!("{path} returned status {status}")
    } else {
        format!("{path} returned status {status}: {body}")
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        MailvanError::Auth(message)
    } else {
        MailvanError::Network(message)
    }
}

fn parse_body(body: &str) -> Result<RawResponse> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(MailvanError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
        Err(err) => Err(MailvanError::MalformedResponse(format!("response is not JSON: {err}"))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
