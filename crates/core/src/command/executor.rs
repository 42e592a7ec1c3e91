//! Command executor - the single entry point for remote operations

use std::sync::Arc;

use mailvan_domain::{Command, Params, RawResponse, Result};
use tracing::{debug, instrument, warn};

use super::classifier::is_error;
use super::enricher::ParameterEnricher;
use super::ports::RemoteInvoker;
use super::translator::translate;

/// Runs commands against a remote service.
///
/// Enriches parameters with the API key, performs exactly one invocation,
/// classifies the response and either fails with the service's error or
/// hands the response to the success transform. Nothing is cached or
/// retried here.
///
/// The success transform is an `FnOnce(RawResponse) -> Result<T>`: it is
/// consumed by the call, so it runs at most once and only on success.
pub struct CommandExecutor {
    service: String,
    invoker: Arc<dyn RemoteInvoker>,
    enricher: ParameterEnricher,
}

impl CommandExecutor {
    /// Create an executor.
    ///
    /// `service` tags every `ServiceError` this executor produces.
    pub fn new(
        service: impl Into<String>,
        invoker: Arc<dyn RemoteInvoker>,
        enricher: ParameterEnricher,
    ) -> Self {
        Self { service: service.into(), invoker, enricher }
    }

    /// Name of the service this executor talks to
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Execute `command_name` with `params`.
    ///
    /// # Errors
    /// - Transport errors from the invoker, unchanged
    /// - `MailvanError::Service` when the response reports failure
    /// - `MailvanError::MalformedResponse` when a failure response lacks its
    ///   error payload
    /// - Whatever `on_success` returns
    #[instrument(skip(self, params, on_success), fields(service = %self.service))]
    pub async fn execute<T, F>(&self, command_name: &str, params: Params, on_success: F) -> Result<T>
    where
        F: FnOnce(RawResponse) -> Result<T> + Send,
    {
        let command = Command::new(command_name, self.enricher.enrich(&params));

        debug!(parameters = command.parameters().len(), "invoking remote command");
        let response = self.invoker.invoke(&command).await?;

        if is_error(&response) {
            let error = translate(&self.service, &response)?;
            warn!(code = error.code, message = %error.message, "remote command failed");
            return Err(error.into());
        }

        debug!("remote command succeeded");
        on_success(response)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mailvan_domain::{ApiKey, MailvanError, ServiceError};
    use serde_json::{json, Value};

    use super::*;

    struct FixedInvoker(Value);

    #[async_trait]
    impl RemoteInvoker for FixedInvoker {
        async fn invoke(&self, _command: &Command) -> Result<RawResponse> {
            match &self.0 {
                Value::Object(map) => Ok(map.clone()),
                _ => Err(MailvanError::Network("connection refused".into())),
            }
        }
    }

    fn executor(response: Value) -> CommandExecutor {
        CommandExecutor::new(
            "smartresponder",
            Arc::new(FixedInvoker(response)),
            ParameterEnricher::new(ApiKey::new("key")),
        )
    }

    #[tokio::test]
    async fn success_runs_transform() {
        let value = executor(json!({"result": 1, "count": 3}))
            .execute("getLists", Params::new(), |raw: RawResponse| Ok(raw["count"].clone()))
            .await
            .unwrap();
        assert_eq!(value, json!(3));
    }

    #[tokio::test]
    async fn failure_becomes_service_error() {
        let err = executor(json!({"result": 0, "error": {"message": "Duplicate", "code": 42}}))
            .execute("subscribe", Params::new(), |_raw: RawResponse| Ok(true))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MailvanError::Service(ServiceError::new("smartresponder", "Duplicate", 42))
        );
    }

    #[tokio::test]
    async fn transport_error_is_not_wrapped() {
        let err = executor(Value::Null)
            .execute("subscribe", Params::new(), |_raw: RawResponse| Ok(true))
            .await
            .unwrap_err();
        assert_eq!(err, MailvanError::Network("connection refused".into()));
    }
}
