//! Variadic front-ends for the numeric sequence functions.
//!
//! Each macro gathers a variable argument list into a slice and forwards it,
//! casting every argument to `f64` so integer literals are accepted.
//!
//! ```
//! use spreadkit::{double_and_return_args, filter_out_odds, find_min};
//!
//! assert_eq!(filter_out_odds![1, 2, 3, 4], vec![2.0, 4.0]);
//! assert_eq!(find_min![4, -1, 7], -1.0);
//! assert_eq!(double_and_return_args!([1.0, 2.0]; 3, 4), vec![1.0, 2.0, 6.0, 8.0]);
//! ```

/// Collects its arguments and keeps the even ones.
#[macro_export]
macro_rules! filter_out_odds {
    ($($n:expr),* $(,)?) => {
        $crate::sequences::filter_out_odds(&[$(($n) as f64),*])
    };
}

/// Collects its arguments and returns the smallest, or `f64::INFINITY` when called bare.
#[macro_export]
macro_rules! find_min {
    ($($n:expr),* $(,)?) => {
        $crate::sequences::find_min(&[$(($n) as f64),*])
    };
}

/// `double_and_return_args!(base; extra...)` appends each extra argument doubled.
#[macro_export]
macro_rules! double_and_return_args {
    ($arr:expr $(; $($n:expr),* $(,)?)?) => {
        $crate::sequences::double_and_return_args(&$arr, &[$($(($n) as f64),*)?])
    };
}
