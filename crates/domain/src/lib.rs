//! # Mailvan Domain
//!
//! Business domain types for Mailvan mailing-list clients.
//!
//! This crate contains:
//! - Value types (User, SubscriptionList, Command, ApiKey)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Protocol constants shared by the command layer and its adapters
//!
//! ## Architecture
//! - No dependencies on other Mailvan crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
