use alloc::vec::Vec;
use num_traits::Float;

use crate::{
    Kbn, ZeroPolicy,
    helper::{count_as, median_from_sorted_slice, min_max, sorted_ascending},
};

/// Descriptive statistics of one observation sequence.
///
/// All fields are derived from the same filtered sequence. When nothing survives the
/// filter every field is zero, see [`summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary<T> {
    /// Arithmetic mean
    pub mean: T,
    /// Middle value, or the average of the two middle values for an even count
    pub median: T,
    /// Population standard deviation (divides by `n`)
    pub std_dev: T,
    /// Smallest value
    pub min: T,
    /// Largest value
    pub max: T,
}

impl<T: Float> Summary<T> {
    /// The all-zero summary returned for an empty sequence
    pub fn zero() -> Self {
        Self {
            mean: T::zero(),
            median: T::zero(),
            std_dev: T::zero(),
            min: T::zero(),
            max: T::zero(),
        }
    }
}

/// Returns the descriptive summary (mean, median, standard deviation, min, max) of a sequence
///
/// NaN values are always dropped; zeros are dropped when `policy` is
/// [`ZeroPolicy::Exclude`]. The standard deviation is the population deviation, the square
/// root of the mean squared deviation from the mean.
///
/// This function never fails: when no value survives the filter, every field of the
/// returned [`Summary`] is zero.
///
/// # Arguments
///
/// * `values` - The observation sequence
/// * `policy` - Whether zero counts as a missing value
///
/// # Returns
///
/// * `Summary<T>` - The summary of the admitted values
///
/// # Examples
///
/// ```
/// use survey_statistics::{summary, ZeroPolicy};
/// use assert_approx_eq::assert_approx_eq;
///
/// let s = summary(&[1.0_f64, 2.0, 0.0, 3.0, 4.0], ZeroPolicy::Exclude);
/// assert_eq!(s.mean, 2.5);
/// assert_eq!(s.median, 2.5);
/// assert_approx_eq!(s.std_dev, 1.1180, 0.0001);
/// assert_eq!((s.min, s.max), (1.0, 4.0));
///
/// let s = summary(&[1.0_f64, 2.0, 0.0, 3.0, 4.0], ZeroPolicy::Include);
/// assert_eq!(s.mean, 2.0);
/// assert_eq!(s.min, 0.0);
/// ```
pub fn summary<T>(values: &[T], policy: ZeroPolicy) -> Summary<T>
where
    T: Default + Float + num_traits::float::FloatCore,
{
    let admitted: Vec<T> = values
        .iter()
        .copied()
        .filter(|&v| policy.admits(v))
        .collect();

    let Some((min, max)) = min_max(admitted.iter().copied()) else {
        log::debug!(
            "summary fallback: no valid values out of {}",
            values.len()
        );
        return Summary::zero();
    };

    let n = count_as::<T>(admitted.len());

    let mut sum = Kbn::<T>::default();
    for &v in &admitted {
        sum += v;
    }
    let mean = sum.total() / n;

    let mut sum_sq_dev = Kbn::<T>::default();
    for &v in &admitted {
        let dev = v - mean;
        sum_sq_dev += dev * dev;
    }
    let std_dev = (sum_sq_dev.total() / n).sqrt();

    let median = median_from_sorted_slice(&sorted_ascending(&admitted));

    Summary {
        mean,
        median,
        std_dev,
        min,
        max,
    }
}
