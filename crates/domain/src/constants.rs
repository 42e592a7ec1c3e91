//! Protocol constants
//!
//! Field names and command names shared by the command layer and the
//! SmartResponder adapters.

// Service identity
pub const SMARTRESPONDER_SERVICE: &str = "smartresponder";

// Outbound parameters
pub const API_KEY_PARAM: &str = "api_key";
pub const DELIVERY_ID_PARAM: &str = "delivery_id";
pub const EMAIL_PARAM: &str = "email";
pub const FIRST_NAME_PARAM: &str = "first_name";
pub const LAST_NAME_PARAM: &str = "last_name";
pub const SEARCH_PARAM: &str = "search";

// Response fields
pub const RESULT_FIELD: &str = "result";
pub const ERROR_FIELD: &str = "error";
pub const ERROR_MESSAGE_FIELD: &str = "message";
pub const ERROR_CODE_FIELD: &str = "code";
pub const LIST_FIELD: &str = "list";
pub const LIST_ID_FIELD: &str = "id";

// Remote commands
pub const SUBSCRIBE_COMMAND: &str = "subscribe";
pub const UNSUBSCRIBE_COMMAND: &str = "unsubscribe";
pub const GET_LISTS_COMMAND: &str = "getLists";

// Client defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
