//! Untyped input boundary
//!
//! Values arriving as `serde_json::Value` (configuration files, RPC payloads,
//! foreign callers) are not guaranteed to be strings. The configured
//! `InputPolicy` decides whether a non-string is an error or an empty result.

use serde_json::Value;

use crate::converter::convert;
use crate::options::{CaseOptions, InputPolicy};
use crate::{Error, Result};

/// Convert a JSON value.
///
/// # Errors
/// Returns `InvalidInputType` when `input` is not a string and the policy is
/// `Strict`. Under `Lenient` a non-string yields `""`.
pub fn convert_value(input: &Value, options: &CaseOptions) -> Result<String> {
    match input {
        Value::String(s) => Ok(convert(s, options)),
        other => match options.on_invalid_input {
            InputPolicy::Strict => Err(Error::invalid_input_type(json_type_name(other))),
            InputPolicy::Lenient => {
                tracing::debug!(
                    found = json_type_name(other),
                    "non-string input replaced with empty string"
                );
                Ok(String::new())
            }
        },
    }
}

/// Convert a batch of values, stopping at the first strict failure
pub fn convert_values(inputs: &[Value], options: &CaseOptions) -> Result<Vec<String>> {
    inputs.iter().map(|v| convert_value(v, options)).collect()
}

/// Kebab-case with the strict policy: non-strings are an error
pub fn kebab_case_value(input: &Value) -> Result<String> {
    convert_value(input, &CaseOptions::kebab())
}

/// Dot-case with the lenient policy: non-strings become `""`
pub fn dot_case_value(input: &Value) -> String {
    convert_value(input, &CaseOptions::dot()).unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Strings pass through ───────────────────────────

    #[test]
    fn test_string_value_converted() {
        assert_eq!(
            kebab_case_value(&json!("myVariableName")).unwrap(),
            "my-variable-name"
        );
        assert_eq!(dot_case_value(&json!("helloWorld")), "hello.world");
    }

    #[test]
    fn test_empty_string_value() {
        assert_eq!(kebab_case_value(&json!("")).unwrap(), "");
        assert_eq!(dot_case_value(&json!("")), "");
    }

    // ── Policies ───────────────────────────────────────

    #[test]
    fn test_strict_rejects_number() {
        let err = kebab_case_value(&json!(123)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInputType {
                found: "number".into()
            }
        );
    }

    #[test]
    fn test_strict_reports_each_type() {
        let cases = [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(1.5), "number"),
            (json!(["a"]), "array"),
            (json!({"a": 1}), "object"),
        ];
        for (value, expected) in cases {
            match kebab_case_value(&value) {
                Err(Error::InvalidInputType { found }) => assert_eq!(found, expected),
                other => panic!("expected InvalidInputType for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_lenient_returns_empty() {
        assert_eq!(dot_case_value(&json!(123)), "");
        assert_eq!(dot_case_value(&json!(null)), "");
        assert_eq!(dot_case_value(&json!({"helloWorld": 1})), "");
    }

    #[test]
    fn test_policy_is_configurable() {
        let lenient_kebab = CaseOptions::kebab().with_policy(InputPolicy::Lenient);
        assert_eq!(convert_value(&json!(123), &lenient_kebab).unwrap(), "");

        let strict_dot = CaseOptions::dot().with_policy(InputPolicy::Strict);
        assert!(convert_value(&json!(123), &strict_dot).is_err());
        assert_eq!(
            convert_value(&json!("hello-world"), &strict_dot).unwrap(),
            "hello.world"
        );
    }

    // ── Batches ────────────────────────────────────────

    #[test]
    fn test_convert_values_lenient() {
        let inputs = [json!("fooBar"), json!(7), json!("BAZ_QUX")];
        let out = convert_values(&inputs, &CaseOptions::dot()).unwrap();
        assert_eq!(out, vec!["foo.bar", "", "baz.qux"]);
    }

    #[test]
    fn test_convert_values_strict_stops_on_first_error() {
        let inputs = [json!("fooBar"), json!(false), json!(7)];
        let err = convert_values(&inputs, &CaseOptions::kebab()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInputType {
                found: "boolean".into()
            }
        );
    }
}
