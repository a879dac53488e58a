//! Shallow merging of objects.

use super::Object;

/// Returns a new object holding every key of `a` overlaid by every key of `b`.
///
/// On a shared key the value from `b` wins. Nested values are cloned as-is,
/// not merged recursively.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spreadkit::objects::{merge_objects, Object};
///
/// let a: Object = serde_json::from_value(json!({"a": 1, "b": 2})).unwrap();
/// let b: Object = serde_json::from_value(json!({"c": 3, "d": 4})).unwrap();
///
/// let merged = merge_objects(&a, &b);
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": 1, "b": 2, "c": 3, "d": 4}));
/// ```
pub fn merge_objects(a: &Object, b: &Object) -> Object {
    let mut merged = a.clone();
    merged.extend(b.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Combines two objects into a new one, with `b` taking precedence.
///
/// Same contract as [`merge_objects`]; an empty object on either side is
/// an identity.
pub fn combine(a: &Object, b: &Object) -> Object {
    merge_objects(a, b)
}
