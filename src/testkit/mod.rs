//! Testing infrastructure for spreadkit.
//!
//! - **Assertion macros**: input-unchanged checks and Result/error assertions
//! - **Fixtures**: small object builders shared by unit and integration tests

pub mod assertions;

use serde_json::Value;

use crate::objects::Object;

/// Build an [`Object`] from a `json!` literal.
///
/// Panics if the value is not a JSON object; fixtures are expected to be well formed.
pub fn object(value: Value) -> Object {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not a JSON object: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_fixture() {
        let obj = object(json!({"name": "Alice"}));
        assert_eq!(obj.get("name"), Some(&json!("Alice")));
    }

    #[test]
    #[should_panic(expected = "fixture is not a JSON object")]
    fn test_object_fixture_rejects_arrays() {
        object(json!([1, 2]));
    }

    #[test]
    fn test_assert_unmutated_returns_result() {
        let a = vec![1, 2];
        let len = crate::assert_unmutated!(a => a.len());
        assert_eq!(len, 2);
    }

    #[test]
    #[should_panic(expected = "input was mutated")]
    fn test_assert_unmutated_detects_mutation() {
        let mut a = vec![1, 2];
        crate::assert_unmutated!(a => a.push(3));
    }

    #[test]
    fn test_assert_contains_error() {
        let result: Result<(), String> = Err("Expected an array for items".to_string());
        let err = crate::assert_contains_error!(result, "an array");
        assert!(err.ends_with("items"));
    }
}
