//! # spreadkit
//!
//! Pure sequence and object composition with rest/spread semantics.
//!
//! Every operation borrows its inputs and returns a freshly allocated
//! container, so callers never observe their data changing underneath them.
//!
//! ```
//! use serde_json::json;
//! use spreadkit::{combine, extend, remove_key, testkit::object};
//!
//! assert_eq!(extend(&[1, 2, 3], &[4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
//!
//! let a = object(json!({"name": "Alice", "age": 25}));
//! let b = object(json!({"city": "Wonderland", "age": 30}));
//! assert_eq!(combine(&a, &b), object(json!({"name": "Alice", "age": 30, "city": "Wonderland"})));
//! assert_eq!(remove_key(&a, "height"), a);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
pub mod macros;
pub mod objects;
pub mod sequences;
pub mod testkit;

// Re-export commonly used items
pub use crate::errors::{Error, Result};

pub use crate::sequences::{
    checked_find_min, double_and_return_args, extend, filter_out_odds, find_min, remove_at,
    remove_random, remove_random_with,
};

pub use crate::objects::{
    add_key_val, combine, merge_objects, remove_key, update, Object, PersistentObject,
};
