//! Port interfaces for subscription management
//!
//! These traits define the boundaries between the subscription use cases,
//! the surrounding domain layer and callers that only need the operations.

use async_trait::async_trait;
use mailvan_domain::{Result, SubscriptionList, User};

/// Builds list values from identifiers returned by the service.
pub trait SubscriptionListFactory: Send + Sync {
    /// Create the list for a raw remote identifier.
    fn create_subscription_list(&self, id: &str) -> SubscriptionList;
}

/// Factory producing plain [`SubscriptionList`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSubscriptionListFactory;

impl SubscriptionListFactory for DefaultSubscriptionListFactory {
    fn create_subscription_list(&self, id: &str) -> SubscriptionList {
        SubscriptionList::new(id)
    }
}

/// Subscription operations offered by a mailing-list service
#[async_trait]
pub trait MailingListClient: Send + Sync {
    /// Add `user` to `list`.
    async fn subscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool>;

    /// Remove `user` from `list`.
    async fn unsubscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool>;

    /// Move `user` from one list to another.
    ///
    /// Implementations may need several remote calls and need not be
    /// atomic.
    async fn move_subscriber(
        &self,
        user: &User,
        from: &SubscriptionList,
        to: &SubscriptionList,
    ) -> Result<bool>;

    /// Lists owned by the account, in the order the service returns them.
    async fn get_lists(&self) -> Result<Vec<SubscriptionList>>;
}
