//! SmartResponder HTTP adapter
//!
//! Plumbing between the core command executor and the SmartResponder web
//! API:
//! - [`operations`]: command name → endpoint table
//! - [`encoding`]: parameter map → form body
//! - [`invoker`]: the `RemoteInvoker` implementation over [`HttpClient`]
//! - [`client`]: factory functions wiring everything together
//!
//! [`HttpClient`]: crate::http::HttpClient

pub mod client;
pub mod encoding;
pub mod invoker;
pub mod operations;

pub use client::{connect, connect_with_factory};
pub use invoker::HttpRemoteInvoker;
pub use operations::Operation;
