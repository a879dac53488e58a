//! Order-preserving slice composition: concatenation and single-element removal.

use rand::Rng;

/// Returns every element of `a` followed by every element of `b`.
///
/// # Examples
///
/// ```
/// use spreadkit::sequences::extend;
///
/// assert_eq!(extend(&[1, 2, 3], &[4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn extend<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().chain(b).cloned().collect()
}

/// Returns a copy of `items` without the element at `idx`.
///
/// An out-of-range `idx` removes nothing and yields a full copy.
pub fn remove_at<T: Clone>(items: &[T], idx: usize) -> Vec<T> {
    let (head, tail) = items.split_at(idx.min(items.len()));
    head.iter().chain(tail.iter().skip(1)).cloned().collect()
}

/// Returns a copy of `items` with one uniformly chosen element removed.
///
/// Uses the thread-local generator. An empty slice yields an empty vector.
pub fn remove_random<T: Clone>(items: &[T]) -> Vec<T> {
    remove_random_with(items, &mut rand::rng())
}

/// [`remove_random`] driven by a caller-supplied generator.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use spreadkit::sequences::remove_random_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = remove_random_with(&["a", "b", "c"], &mut rng);
/// assert_eq!(result.len(), 2);
/// ```
pub fn remove_random_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Vec::new();
    }

    let idx = rng.random_range(0..items.len());
    log::trace!("Removing index {} of {}", idx, items.len());
    remove_at(items, idx)
}
