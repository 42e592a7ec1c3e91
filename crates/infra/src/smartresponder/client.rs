//! SmartResponder client factory
//!
//! Wires `HttpClient` → `HttpRemoteInvoker` → `CommandExecutor` →
//! `SubscriptionService` from a validated configuration.

use std::sync::Arc;
use std::time::Duration;

use mailvan_core::{
    CommandExecutor, DefaultSubscriptionListFactory, ParameterEnricher, SubscriptionListFactory,
    SubscriptionService,
};
use mailvan_domain::constants::SMARTRESPONDER_SERVICE;
use mailvan_domain::{MailvanError, Result, SmartResponderConfig};
use tracing::info;
use url::Url;

use super::invoker::HttpRemoteInvoker;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Build a SmartResponder client using plain list values.
///
/// # Errors
/// Returns `MailvanError::Config` when the configuration is incomplete or
/// the base URL is not an absolute http(s) URL.
pub fn connect(config: &SmartResponderConfig) -> Result<SubscriptionService> {
    connect_with_factory(config, Arc::new(DefaultSubscriptionListFactory))
}

/// Build a SmartResponder client that creates lists through `lists`.
///
/// # Errors
/// See [`connect`].
pub fn connect_with_factory(
    config: &SmartResponderConfig,
    lists: Arc<dyn SubscriptionListFactory>,
) -> Result<SubscriptionService> {
    config.validate()?;
    let base_url = parse_base_url(&config.base_url)?;

    let http = HttpClient::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .max_attempts(config.max_attempts)
        .build()?;

    let invoker = HttpRemoteInvoker::new(http, base_url.as_str());
    let executor = CommandExecutor::new(
        SMARTRESPONDER_SERVICE,
        Arc::new(invoker),
        ParameterEnricher::new(config.api_key.clone()),
    );

    info!(base_url = %base_url, "SmartResponder client ready");
    Ok(SubscriptionService::new(executor, lists))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|err| MailvanError::from(InfraError::from(err)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(MailvanError::Config(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(MailvanError::Config("base URL has no host".into()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use mailvan_domain::ApiKey;

    use super::*;

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(parse_base_url("api.smartresponder.ru"), Err(MailvanError::Config(_))));
        assert!(matches!(
            parse_base_url("ftp://api.smartresponder.ru"),
            Err(MailvanError::Config(_))
        ));
        assert_eq!(
            parse_base_url(" https://api.smartresponder.ru ").unwrap().host_str(),
            Some("api.smartresponder.ru")
        );
    }

    #[test]
    fn connect_validates_configuration() {
        let missing_key = SmartResponderConfig::new("https://api.smartresponder.ru", ApiKey::new(""));
        assert!(matches!(connect(&missing_key), Err(MailvanError::Config(_))));

        let bad_url = SmartResponderConfig::new("not a url", ApiKey::new("k"));
        assert!(matches!(connect(&bad_url), Err(MailvanError::Config(_))));
    }

    #[test]
    fn connect_builds_a_smartresponder_client() {
        let config = SmartResponderConfig::new("https://api.smartresponder.ru", ApiKey::new("k"));
        let service = connect(&config).unwrap();
        assert_eq!(service.executor().service(), SMARTRESPONDER_SERVICE);
    }
}
