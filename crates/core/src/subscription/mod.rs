//! Subscription-list management use cases

pub mod ports;
pub mod service;

pub use service::SubscriptionService;
