// Shared generators for spreadkit integration tests
#![allow(dead_code)]

use proptest::prelude::*;
use serde_json::Value;
use spreadkit::Object;

/// Short lowercase keys so generated objects collide often
pub fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

/// Leaf JSON values; nesting is irrelevant to shallow operations
pub fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

pub fn object() -> impl Strategy<Value = Object> {
    prop::collection::btree_map(key(), leaf_value(), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Integral floats, so even/odd is meaningful
pub fn integral_numbers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-1000i32..1000).prop_map(f64::from), 0..20)
}
