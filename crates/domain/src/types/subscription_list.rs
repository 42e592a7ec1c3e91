use std::fmt;

use serde::{Deserialize, Serialize};

/// A mailing list on the remote service.
///
/// The id is what SmartResponder calls a delivery id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionList {
    id: String,
}

impl SubscriptionList {
    /// Create a list handle for a known delivery id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Delivery id on the remote service
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SubscriptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
