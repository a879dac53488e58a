//! Single-key edits that return a modified copy.

use serde_json::Value;

use super::Object;

/// Returns a copy of `obj` with `key` set to `val`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spreadkit::objects::{add_key_val, Object};
///
/// let mut person = Object::new();
/// person.insert("name".into(), json!("Alice"));
///
/// let older = add_key_val(&person, "age", 30);
/// assert_eq!(older.get("age"), Some(&json!(30)));
/// assert!(person.get("age").is_none());
/// ```
pub fn add_key_val(obj: &Object, key: &str, val: impl Into<Value>) -> Object {
    let mut next = obj.clone();
    next.insert(key.to_string(), val.into());
    next
}

/// Returns a copy of `obj` with `key` set to `val`, existing or not.
///
/// Results are ordinary objects, so calls chain:
///
/// ```
/// use spreadkit::objects::{update, Object};
///
/// let base = Object::new();
/// let result = update(&update(&base, "age", 28), "city", "Townsville");
/// assert_eq!(result.len(), 2);
/// ```
pub fn update(obj: &Object, key: &str, val: impl Into<Value>) -> Object {
    add_key_val(obj, key, val)
}

/// Returns a copy of `obj` without `key`. A missing key yields an equal copy.
pub fn remove_key(obj: &Object, key: &str) -> Object {
    obj.iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
