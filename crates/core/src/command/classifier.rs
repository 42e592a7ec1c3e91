//! Success/failure classification of raw responses
//!
//! SmartResponder marks failures with `result == 0`. The comparison is
//! numeric: `0` and `0.0` fail, any other number succeeds.

use mailvan_domain::constants::RESULT_FIELD;
use mailvan_domain::RawResponse;
use serde_json::Value;

/// Whether `response` reports a failure.
///
/// Numeric strings are parsed and booleans count as 0/1. A discriminator
/// that is missing, null, not numeric or not finite (`NaN`, `inf`) counts
/// as zero; the translator then rejects the payload as malformed.
pub fn is_error(response: &RawResponse) -> bool {
    discriminator(response.get(RESULT_FIELD)) == 0.0
}

fn discriminator(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(f64::from(u8::from(*b))),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(result: Value) -> RawResponse {
        let mut map = RawResponse::new();
        map.insert(RESULT_FIELD.into(), result);
        map
    }

    #[test]
    fn integer_zero_is_error() {
        assert!(is_error(&response(json!(0))));
    }

    #[test]
    fn float_zero_is_error() {
        assert!(is_error(&response(json!(0.0))));
    }

    #[test]
    fn one_is_success() {
        assert!(!is_error(&response(json!(1))));
    }

    #[test]
    fn any_non_zero_number_is_success() {
        assert!(!is_error(&response(json!(2))));
        assert!(!is_error(&response(json!(-1))));
        assert!(!is_error(&response(json!(0.5))));
    }

    #[test]
    fn numeric_strings_are_compared_numerically() {
        assert!(is_error(&response(json!("0"))));
        assert!(is_error(&response(json!("0.0"))));
        assert!(!is_error(&response(json!("1"))));
    }

    #[test]
    fn booleans_map_to_zero_and_one() {
        assert!(is_error(&response(json!(false))));
        assert!(!is_error(&response(json!(true))));
    }

    #[test]
    fn missing_or_unusable_discriminator_is_error() {
        assert!(is_error(&RawResponse::new()));
        assert!(is_error(&response(Value::Null)));
        assert!(is_error(&response(json!("ok"))));
        assert!(is_error(&response(json!({"nested": 1}))));
    }

    #[test]
    fn non_finite_strings_are_error() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", "-Infinity"] {
            assert!(is_error(&response(json!(text))), "{text} must count as failure");
        }
    }
}
