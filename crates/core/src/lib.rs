//! # Mailvan Core
//!
//! Pure client logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The command execution and error-classification layer
//! - Subscription use cases built on top of it
//!
//! ## Architecture Principles
//! - Only depends on `mailvan-domain`
//! - No HTTP or file-system code
//! - All remote calls go through the [`RemoteInvoker`] port
//! - Pure, testable business logic

pub mod command;
pub mod subscription;

// Re-export specific items to avoid ambiguity
pub use command::ports::RemoteInvoker;
pub use command::{CommandExecutor, ParameterEnricher};
pub use subscription::ports::{
    DefaultSubscriptionListFactory, MailingListClient, SubscriptionListFactory,
};
pub use subscription::SubscriptionService;
