//! Subscription service - core business logic

use std::sync::Arc;

use async_trait::async_trait;
use mailvan_domain::constants::{
    DELIVERY_ID_PARAM, EMAIL_PARAM, FIRST_NAME_PARAM, GET_LISTS_COMMAND, LAST_NAME_PARAM,
    LIST_FIELD, LIST_ID_FIELD, SEARCH_PARAM, SUBSCRIBE_COMMAND, UNSUBSCRIBE_COMMAND,
};
use mailvan_domain::{MailvanError, Params, RawResponse, Result, SubscriptionList, User};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::ports::{MailingListClient, SubscriptionListFactory};
use crate::command::CommandExecutor;

/// Subscribe, unsubscribe, move and list operations over a
/// [`CommandExecutor`].
pub struct SubscriptionService {
    executor: CommandExecutor,
    lists: Arc<dyn SubscriptionListFactory>,
}

impl SubscriptionService {
    /// Create a new subscription service
    pub fn new(executor: CommandExecutor, lists: Arc<dyn SubscriptionListFactory>) -> Self {
        Self { executor, lists }
    }

    /// The executor every operation goes through
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Subscribe `user` to `list`.
    ///
    /// # Errors
    /// `MailvanError::Service` when the service refuses (already subscribed,
    /// unknown list, ...), or a transport error.
    #[instrument(skip(self, user), fields(list = %list.id()))]
    pub async fn subscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool> {
        let mut params = Params::new();
        params.insert(DELIVERY_ID_PARAM.into(), Value::from(list.id()));
        params.insert(EMAIL_PARAM.into(), Value::from(user.email()));
        params.insert(FIRST_NAME_PARAM.into(), Value::from(user.first_name()));
        params.insert(LAST_NAME_PARAM.into(), Value::from(user.last_name()));

        self.executor.execute(SUBSCRIBE_COMMAND, params, |_response: RawResponse| Ok(true)).await
    }

    /// Unsubscribe `user` from `list`.
    ///
    /// The service locates the subscriber by email.
    ///
    /// # Errors
    /// `MailvanError::Service` when the service refuses, or a transport
    /// error.
    #[instrument(skip(self, user), fields(list = %list.id()))]
    pub async fn unsubscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool> {
        let mut search = Params::new();
        search.insert(EMAIL_PARAM.into(), Value::from(user.email()));

        let mut params = Params::new();
        params.insert(DELIVERY_ID_PARAM.into(), Value::from(list.id()));
        params.insert(SEARCH_PARAM.into(), Value::Object(search));

        self.executor.execute(UNSUBSCRIBE_COMMAND, params, |_response: RawResponse| Ok(true)).await
    }

    /// Move `user` from `from` to `to`.
    ///
    /// Not atomic: unsubscribes first and subscribes only if that worked. When
    /// the subscribe step fails the user is left in neither list; nothing is
    /// rolled back and the subscribe error is returned. Callers that need
    /// all-or-nothing semantics must reconcile above this layer.
    ///
    /// # Errors
    /// The error of whichever step failed.
    #[instrument(skip(self, user), fields(from = %from.id(), to = %to.id()))]
    pub async fn move_subscriber(
        &self,
        user: &User,
        from: &SubscriptionList,
        to: &SubscriptionList,
    ) -> Result<bool> {
        if !self.unsubscribe(user, from).await? {
            return Ok(false);
        }

        match self.subscribe(user, to).await {
            Ok(subscribed) => {
                info!("subscriber moved");
                Ok(subscribed)
            }
            Err(err) => {
                warn!(
                    from = %from.id(),
                    to = %to.id(),
                    error = %err,
                    "subscriber removed from source list but not added to target list"
                );
                Err(err)
            }
        }
    }

    /// Fetch the account's lists, preserving the service's order.
    ///
    /// # Errors
    /// `MailvanError::MalformedResponse` when the `list` payload is missing
    /// or an entry has no usable `id`, plus the usual command errors.
    #[instrument(skip(self))]
    pub async fn get_lists(&self) -> Result<Vec<SubscriptionList>> {
        let factory = &self.lists;
        self.executor
            .execute(GET_LISTS_COMMAND, Params::new(), move |response: RawResponse| {
                lists_from_response(factory.as_ref(), &response)
            })
            .await
    }
}

#[async_trait]
impl MailingListClient for SubscriptionService {
    async fn subscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool> {
        Self::subscribe(self, user, list).await
    }

    async fn unsubscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool> {
        Self::unsubscribe(self, user, list).await
    }

    async fn move_subscriber(
        &self,
        user: &User,
        from: &SubscriptionList,
        to: &SubscriptionList,
    ) -> Result<bool> {
        Self::move_subscriber(self, user, from, to).await
    }

    async fn get_lists(&self) -> Result<Vec<SubscriptionList>> {
        Self::get_lists(self).await
    }
}

fn lists_from_response(
    factory: &dyn SubscriptionListFactory,
    response: &RawResponse,
) -> Result<Vec<SubscriptionList>> {
    let Some(Value::Array(entries)) = response.get(LIST_FIELD) else {
        return Err(MailvanError::MalformedResponse(format!(
            "getLists response has no '{LIST_FIELD}' array"
        )));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .as_object()
                .and_then(|entry| entry.get(LIST_ID_FIELD))
                .and_then(list_id)
                .map(|id| factory.create_subscription_list(&id))
                .ok_or_else(|| {
                    MailvanError::MalformedResponse(format!(
                        "getLists entry {index} has no usable '{LIST_ID_FIELD}'"
                    ))
                })
        })
        .collect()
}

// Delivery ids come back as numbers from some endpoints. An empty string is
// still an id; the service decides what it refers to.
fn list_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::subscription::ports::DefaultSubscriptionListFactory;

    fn response(value: Value) -> RawResponse {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn maps_entries_in_order() {
        let raw = response(json!({"result": 1, "list": [{"id": "b"}, {"id": "a"}, {"id": 7}]}));
        let lists = lists_from_response(&DefaultSubscriptionListFactory, &raw).unwrap();
        let ids: Vec<&str> = lists.iter().map(SubscriptionList::id).collect();
        assert_eq!(ids, vec!["b", "a", "7"]);
    }

    #[test]
    fn empty_list_is_fine() {
        let raw = response(json!({"result": 1, "list": []}));
        assert!(lists_from_response(&DefaultSubscriptionListFactory, &raw).unwrap().is_empty());
    }

    #[test]
    fn missing_list_is_malformed() {
        let raw = response(json!({"result": 1}));
        assert!(matches!(
            lists_from_response(&DefaultSubscriptionListFactory, &raw),
            Err(MailvanError::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_string_id_is_kept() {
        let raw = response(json!({"result": 1, "list": [{"id": ""}, {"id": "a"}]}));
        let lists = lists_from_response(&DefaultSubscriptionListFactory, &raw).unwrap();
        assert_eq!(lists, vec![SubscriptionList::new(""), SubscriptionList::new("a")]);
    }

    #[test]
    fn null_id_is_malformed() {
        let raw = response(json!({"result": 1, "list": [{"id": null}]}));
        assert!(matches!(
            lists_from_response(&DefaultSubscriptionListFactory, &raw),
            Err(MailvanError::MalformedResponse(_))
        ));
    }

    #[test]
    fn entry_without_id_is_malformed() {
        let raw = response(json!({"result": 1, "list": [{"id": "a"}, {"title": "no id"}]}));
        match lists_from_response(&DefaultSubscriptionListFactory, &raw) {
            Err(MailvanError::MalformedResponse(msg)) => assert!(msg.contains("entry 1")),
            other => panic!("expected malformed response, got {:?}", other),
        }
    }
}
