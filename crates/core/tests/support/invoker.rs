//! Scripted remote invoker
//!
//! Replays queued results in order and records every command it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use mailvan_core::RemoteInvoker;
use mailvan_domain::{Command, MailvanError, RawResponse, Result};
use serde_json::Value;

use super::raw;

/// In-memory mock for `RemoteInvoker`.
#[derive(Default)]
pub struct ScriptedInvoker {
    script: Mutex<VecDeque<Result<RawResponse>>>,
    calls: Mutex<Vec<Command>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response object.
    pub fn respond(self, value: Value) -> Self {
        self.script.lock().unwrap().push_back(Ok(raw(value)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: MailvanError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Command> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RemoteInvoker for ScriptedInvoker {
    async fn invoke(&self, command: &Command) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(command.clone());
        self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(MailvanError::Internal(format!("no scripted response for '{}'", command.name())))
        })
    }
}
