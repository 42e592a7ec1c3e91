use std::time::Duration;

use mailvan_domain::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use mailvan_domain::MailvanError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("mailvan/", env!("CARGO_PKG_VERSION"));

/// Which failures a request may be resent after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retry connect failures, timeouts and 5xx responses.
    Idempotent,
    /// Retry connect failures only. A timeout or a 5xx may mean the server
    /// already acted on the request.
    ConnectOnly,
}

/// HTTP client with built-in retry and timeout support.
///
/// Failures allowed by the request's [`RetryPolicy`] are retried with
/// exponential backoff until `max_attempts` is used up. Every other
/// response is handed back unchanged.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, MailvanError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Total attempts made per request, including the first one.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Execute an idempotent request with retry semantics.
    ///
    /// The request body must be buffered (form, json, bytes) so the request
    /// can be rebuilt for each attempt.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, MailvanError> {
        self.send_with_policy(builder, RetryPolicy::Idempotent).await
    }

    /// Execute the request, retrying only what `policy` allows.
    pub async fn send_with_policy(
        &self,
        builder: RequestBuilder,
        policy: RetryPolicy,
    ) -> Result<Response, MailvanError> {
        let attempts = self.max_attempts.max(1);

        for attempt in 0..attempts {
            let cloned_builder = builder.try_clone().ok_or_else(|| {
                MailvanError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            let request = cloned_builder.build().map_err(|err| {
                let infra: InfraError = err.into();
                MailvanError::from(infra)
            })?;

            let method = request.method().clone();
            let path = request.url().path().to_owned();
            debug!(attempt = attempt + 1, %method, %path, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt = attempt + 1, %method, %path, %status, "received HTTP response");

                    if policy == RetryPolicy::Idempotent
                        && status.is_server_error()
                        && attempt + 1 < attempts
                    {
                        warn!(attempt = attempt + 1, %status, "server error, retrying");
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    return Ok(response);
                }
                Err(err) => {
                    debug!(attempt = attempt + 1, %method, %path, error = %err, "HTTP request failed");

                    if attempt + 1 < attempts && should_retry_error(&err, policy) {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    let infra: InfraError = err.into();
                    return Err(MailvanError::from(infra));
                }
            }
        }

        Err(MailvanError::Internal("http client exhausted retries without producing a result".into()))
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        let multiplier = 1u32 << shift;
        self.base_backoff.saturating_mul(multiplier)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: Duration::from_millis(200),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout covering connect and body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient, MailvanError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(|err| {
                let infra: InfraError = err.into();
                MailvanError::from(infra)
            })?;

        Ok(HttpClient { client, max_attempts: self.max_attempts.max(1), base_backoff: self.base_backoff })
    }
}

fn should_retry_error(err: &reqwest::Error, policy: RetryPolicy) -> bool {
    match policy {
        RetryPolicy::Idempotent => err.is_timeout() || err.is_connect(),
        RetryPolicy::ConnectOnly => err.is_connect(),
    }
}
