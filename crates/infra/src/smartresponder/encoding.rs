//! Form encoding for SmartResponder requests
//!
//! The API takes `application/x-www-form-urlencoded` bodies with PHP-style
//! nesting: `search[email]=...`, `ids[0]=...`.

use mailvan_domain::Params;
use serde_json::Value;

/// Form field selecting the remote action
pub const ACTION_FIELD: &str = "action";
/// Form field selecting the response format
pub const FORMAT_FIELD: &str = "format";

/// Flatten `params` into ordered form pairs.
///
/// `action` and `format=json` come first, then the parameters in insertion
/// order. Booleans become `1`/`0` and nulls are dropped.
pub fn encode_form(action: &str, params: &Params) -> Vec<(String, String)> {
    let mut pairs = vec![
        (ACTION_FIELD.to_string(), action.to_string()),
        (FORMAT_FIELD.to_string(), "json".to_string()),
    ];

    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }

    pairs
}

fn flatten(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                flatten(format!("{key}[{name}]"), field, pairs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn action_and_format_lead() {
        let form = encode_form("list", &Params::new());
        assert_eq!(form, vec![pair("action", "list"), pair("format", "json")]);
    }

    #[test]
    fn scalar_fields_keep_order() {
        let form = encode_form(
            "create",
            &params(json!({"delivery_id": "42", "email": "jane@example.com", "api_key": "k"})),
        );
        assert_eq!(
            form,
            vec![
                pair("action", "create"),
                pair("format", "json"),
                pair("delivery_id", "42"),
                pair("email", "jane@example.com"),
                pair("api_key", "k"),
            ]
        );
    }

    #[test]
    fn nested_objects_use_bracket_keys() {
        let form = encode_form("unlink", &params(json!({"search": {"email": "jane@example.com"}})));
        assert_eq!(form[2], pair("search[email]", "jane@example.com"));
    }

    #[test]
    fn arrays_bools_numbers_and_nulls() {
        let form = encode_form(
            "list",
            &params(json!({"ids": [3, 4], "active": true, "archived": false, "page": 2, "tag": null})),
        );
        assert_eq!(
            &form[2..],
            &[
                pair("ids[0]", "3"),
                pair("ids[1]", "4"),
                pair("active", "1"),
                pair("archived", "0"),
                pair("page", "2"),
            ]
        );
    }
}
