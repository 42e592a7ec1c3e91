//! Domain types and models

pub mod command;
pub mod subscription_list;
pub mod user;

pub use command::{Command, Params, RawResponse};
pub use subscription_list::SubscriptionList;
pub use user::User;
