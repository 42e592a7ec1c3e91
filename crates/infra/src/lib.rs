//! # Mailvan Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The retrying HTTP client
//! - The SmartResponder `RemoteInvoker` and client factory
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `mailvan-core`
//! - Depends on `mailvan-domain` and `mailvan-core`
//! - Contains all "impure" code (network and file-system I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod smartresponder;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, RetryPolicy};
pub use smartresponder::{connect, connect_with_factory, HttpRemoteInvoker};
