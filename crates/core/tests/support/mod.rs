//! Shared test helpers for `mailvan-core` integration tests.
//!
//! These helpers provide a scripted [`RemoteInvoker`] and fixtures so the
//! executor and subscription tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod invoker;

use std::sync::Arc;

use mailvan_core::{
    CommandExecutor, DefaultSubscriptionListFactory, ParameterEnricher, SubscriptionService,
};
use mailvan_domain::{ApiKey, RawResponse, SubscriptionList, User};
use serde_json::Value;

pub use invoker::ScriptedInvoker;

pub const TEST_API_KEY: &str = "test-api-key";
pub const SERVICE: &str = "smartresponder";

/// Convert a `json!` object literal into a raw response.
pub fn raw(value: Value) -> RawResponse {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn executor(invoker: Arc<ScriptedInvoker>) -> CommandExecutor {
    CommandExecutor::new(SERVICE, invoker, ParameterEnricher::new(ApiKey::new(TEST_API_KEY)))
}

pub fn service(invoker: Arc<ScriptedInvoker>) -> SubscriptionService {
    SubscriptionService::new(executor(invoker), Arc::new(DefaultSubscriptionListFactory))
}

pub fn jane() -> User {
    User::new("jane@example.com", "Jane", "Doe").expect("valid user")
}

pub fn list(id: &str) -> SubscriptionList {
    SubscriptionList::new(id)
}
