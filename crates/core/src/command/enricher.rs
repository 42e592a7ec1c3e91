//! Authentication parameter injection

use mailvan_domain::constants::API_KEY_PARAM;
use mailvan_domain::{ApiKey, Params};
use serde_json::Value;

/// Adds the configured API key to outbound parameters.
#[derive(Debug, Clone)]
pub struct ParameterEnricher {
    api_key: ApiKey,
}

impl ParameterEnricher {
    /// Create an enricher that adds `api_key` to every command
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// Return a copy of `params` carrying `api_key`.
    ///
    /// An `api_key` the caller already set is kept, so enriching twice is a
    /// no-op. The input is never mutated.
    pub fn enrich(&self, params: &Params) -> Params {
        let mut enriched = params.clone();
        if !enriched.contains_key(API_KEY_PARAM) {
            enriched.insert(
                API_KEY_PARAM.to_string(),
                Value::String(self.api_key.expose().to_string()),
            );
        }
        enriched
    }
}
