use alloc::vec::Vec;
use num_traits::{Float, float::FloatCore};
use ordered_float::OrderedFloat;

/// Returns the median from a sorted slice
///
/// # Arguments
///
/// * `ss` - The sorted slice, must not be empty
///
/// # Returns
///
/// * `T` - The median
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> T {
    let len = ss.len();
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        (ss[mid - 1] + ss[mid]) / _2
    } else {
        ss[mid]
    }
}

/// Returns an ascending copy of the values
///
/// NaN sorts last under the total order of `OrderedFloat`; callers filter it out beforehand.
#[inline]
pub fn sorted_ascending<T: FloatCore>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by_key(|v| OrderedFloat(*v));
    sorted
}

/// Returns the minimum and maximum of the values, or `None` if there are none
#[inline]
pub fn min_max<T: Float>(values: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    let mut values = values.into_iter();
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Returns `true` if every value equals the first one
///
/// Decided on the extrema rather than on a variance, which rounding can leave slightly
/// off zero for values without an exact binary representation.
#[inline]
pub fn is_constant<T: Float>(values: impl IntoIterator<Item = T>) -> bool {
    matches!(min_max(values), Some((lo, hi)) if lo == hi)
}

/// Converts a count into the float type
#[inline]
pub fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
