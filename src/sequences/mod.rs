//! Sequence operations with rest/spread semantics.
//!
//! Every function borrows its inputs and returns a freshly allocated `Vec`.
//!
//! Key components:
//! - **Numeric**: even filtering, minimum, append-with-doubling
//! - **Slicing**: concatenation and single-element removal (fixed or random index)

pub mod numeric;
pub mod slicing;

pub use numeric::{checked_find_min, double_and_return_args, filter_out_odds, find_min};
pub use slicing::{extend, remove_at, remove_random, remove_random_with};
