//! Assertion macros for testing non-mutating operations.
//!
//! - [`crate::assert_unmutated!`] - Snapshot an input, run a call, check the input is unchanged
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//!
//! # Example
//!
//! ```rust
//! use spreadkit::assert_unmutated;
//! use spreadkit::sequences::extend;
//!
//! let a = vec![1, 2, 3];
//! let b = vec![4, 5, 6];
//! let joined = assert_unmutated!(a, b => extend(&a, &b));
//! assert_eq!(joined, vec![1, 2, 3, 4, 5, 6]);
//! ```

/// Snapshot every listed input, evaluate the call, and assert each input
/// still renders the same. Evaluates to the call's result.
///
/// Inputs are compared through their `Debug` output, so they only need `Debug`.
#[macro_export]
macro_rules! assert_unmutated {
    ($($input:expr),+ => $call:expr) => {{
        let before = ::std::format!("{:?}", ($(&$input,)+));
        let result = $call;
        let after = ::std::format!("{:?}", ($(&$input,)+));
        ::std::assert_eq!(
            before,
            after,
            "input was mutated\n  at {}:{}:{}",
            file!(),
            line!(),
            column!()
        );
        result
    }};
}

/// Assert that a Result is Err and extract the error.
///
/// If the Result is Ok, panics with a message showing the value.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that an error message contains a specific pattern.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}
