//! Port interfaces for remote command invocation
//!
//! The core never talks HTTP itself; an adapter implements this trait.

use async_trait::async_trait;
use mailvan_domain::{Command, RawResponse, Result};

/// Performs the network call for a named command.
///
/// Implementations own the wire format (method, path, serialization) and
/// any transport-level retry. They return the decoded response object as-is,
/// without interpreting the service's success flag, and report transport
/// failures as `MailvanError::Network`/`Auth`.
#[async_trait]
pub trait RemoteInvoker: Send + Sync {
    /// Send `command` and return the raw response object.
    async fn invoke(&self, command: &Command) -> Result<RawResponse>;
}
