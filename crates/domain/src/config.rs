//! Client configuration structures
//!
//! Loaded by `mailvan-infra::config` from the environment or a JSON/TOML
//! file and handed to the client factory.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use crate::errors::{MailvanError, Result};

const REDACTED: &str = "[REDACTED]";

/// Service API key.
///
/// Formatting and serialization never reveal the value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the inner value for placing it on the wire.
    ///
    /// The returned value should not be stored or logged.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether no key was configured
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({REDACTED})")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub smartresponder: SmartResponderConfig,
}

/// Connection settings for the SmartResponder API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartResponderConfig {
    /// API root, e.g. `https://api.smartresponder.ru`
    pub base_url: String,
    pub api_key: ApiKey,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total HTTP attempts per command (initial try + retries)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl SmartResponderConfig {
    /// Settings with default timeout and attempt count
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Check that both required settings are present.
    ///
    /// # Errors
    /// Returns `MailvanError::Config` naming the first missing setting.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(MailvanError::Config("smartresponder.base_url is required".into()));
        }
        if self.api_key.is_empty() {
            return Err(MailvanError::Config("smartresponder.api_key is required".into()));
        }
        if self.timeout_secs == 0 {
            return Err(MailvanError::Config("smartresponder.timeout_secs must be > 0".into()));
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_redacted_everywhere() {
        let key = ApiKey::new("s3cret");
        assert_eq!(format!("{key}"), REDACTED);
        assert!(!format!("{key:?}").contains("s3cret"));
        assert_eq!(serde_json::to_string(&key).unwrap(), format!("\"{REDACTED}\""));
        assert_eq!(key.expose(), "s3cret");
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let config: SmartResponderConfig = serde_json::from_str(
            r#"{"base_url": "https://api.smartresponder.ru", "api_key": "abc"}"#,
        )
        .unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.api_key.expose(), "abc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_reports_missing_settings() {
        let missing_url = SmartResponderConfig::new(" ", ApiKey::new("abc"));
        match missing_url.validate() {
            Err(MailvanError::Config(msg)) => assert!(msg.contains("base_url")),
            other => panic!("expected config error, got {:?}", other),
        }

        let missing_key = SmartResponderConfig::new("https://api.smartresponder.ru", ApiKey::new(""));
        match missing_key.validate() {
            Err(MailvanError::Config(msg)) => assert!(msg.contains("api_key")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
