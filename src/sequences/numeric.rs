//! Numeric sequence operations.
//!
//! Numbers are `f64` throughout, so the odd/even and minimum rules follow
//! floating point semantics: fractional values are never even and a NaN
//! anywhere in the input poisons the minimum.

/// Returns the even-valued elements of `args`, in their original order.
///
/// # Examples
///
/// ```
/// use spreadkit::sequences::filter_out_odds;
///
/// assert_eq!(filter_out_odds(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), vec![2.0, 4.0, 6.0]);
/// ```
pub fn filter_out_odds(args: &[f64]) -> Vec<f64> {
    args.iter().copied().filter(|n| is_even(*n)).collect()
}

fn is_even(n: f64) -> bool {
    n % 2.0 == 0.0
}

/// Returns the smallest value in `args`.
///
/// Mirrors `Math.min`: an empty slice yields `f64::INFINITY` and any NaN
/// yields NaN; `-0.0` counts as smaller than `0.0`. Use [`checked_find_min`]
/// to distinguish the empty case.
///
/// # Examples
///
/// ```
/// use spreadkit::sequences::find_min;
///
/// assert_eq!(find_min(&[1.0, 4.0, 12.0, -3.0]), -3.0);
/// assert_eq!(find_min(&[]), f64::INFINITY);
/// ```
pub fn find_min(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::INFINITY, |min, n| {
        if min.is_nan() || n.is_nan() {
            f64::NAN
        } else if n < min || (n == 0.0 && min == 0.0 && n.is_sign_negative()) {
            n
        } else {
            min
        }
    })
}

/// Like [`find_min`], but `None` for an empty slice.
pub fn checked_find_min(args: &[f64]) -> Option<f64> {
    if args.is_empty() {
        None
    } else {
        Some(find_min(args))
    }
}

/// Returns `arr` followed by every element of `extra` doubled.
///
/// # Examples
///
/// ```
/// use spreadkit::sequences::double_and_return_args;
///
/// assert_eq!(
///     double_and_return_args(&[1.0, 2.0, 3.0], &[4.0, 4.0]),
///     vec![1.0, 2.0, 3.0, 8.0, 8.0]
/// );
/// ```
pub fn double_and_return_args(arr: &[f64], extra: &[f64]) -> Vec<f64> {
    arr.iter()
        .copied()
        .chain(extra.iter().map(|n| n * 2.0))
        .collect()
}
