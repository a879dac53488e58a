//! Object operations over `im::HashMap`.
//!
//! The persistent map shares structure between versions, so each edit costs
//! a path copy rather than a full clone while the input stays untouched.

use im::HashMap;
use serde_json::Value;

use super::Object;

/// Persistent counterpart of [`Object`]
pub type PersistentObject = HashMap<String, Value>;

pub fn to_persistent(obj: &Object) -> PersistentObject {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

pub fn from_persistent(obj: &PersistentObject) -> Object {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Shallow merge; `b` wins on shared keys.
pub fn merge(a: &PersistentObject, b: &PersistentObject) -> PersistentObject {
    let mut merged = a.clone();
    merged.extend(b.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

pub fn add_key_val(obj: &PersistentObject, key: &str, val: impl Into<Value>) -> PersistentObject {
    obj.update(key.to_string(), val.into())
}

pub fn update(obj: &PersistentObject, key: &str, val: impl Into<Value>) -> PersistentObject {
    add_key_val(obj, key, val)
}

pub fn remove_key(obj: &PersistentObject, key: &str) -> PersistentObject {
    obj.without(key)
}
