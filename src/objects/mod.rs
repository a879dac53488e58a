//! Object operations with spread semantics.
//!
//! An [`Object`] maps string keys to arbitrary JSON values. Every function
//! borrows its inputs and returns a new object; shallow copies only.
//!
//! Key components:
//! - **Merge**: `merge_objects` / `combine`, later object wins
//! - **Keys**: `add_key_val`, `update`, `remove_key`
//! - **Persistent**: the same operations over a structurally shared `im::HashMap`

pub mod keys;
pub mod merge;
pub mod persistent;

pub use keys::{add_key_val, remove_key, update};
pub use merge::{combine, merge_objects};
pub use persistent::PersistentObject;

/// String-keyed map of JSON values
pub type Object = serde_json::Map<String, serde_json::Value>;
