//! Remote command types
//!
//! A command is a name plus an ordered parameter bag. Responses come back
//! as a loosely typed JSON object whose shape depends on the command.

use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered parameter mapping sent with a command.
pub type Params = Map<String, Value>;

/// Raw response object returned by the remote service.
pub type RawResponse = Map<String, Value>;

/// A single remote call, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    name: String,
    parameters: Params,
}

impl Command {
    /// Build a command from a name and its parameters
    pub fn new(name: impl Into<String>, parameters: Params) -> Self {
        Self { name: name.into(), parameters }
    }

    /// Remote command name, e.g. `subscribe`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters as they will be sent
    pub fn parameters(&self) -> &Params {
        &self.parameters
    }
}
