use num_traits::Float;

use crate::{PairedSums, ZeroPolicy, helper::is_constant};

/// Returns the Pearson product-moment correlation coefficient of two paired sequences
///
/// Element `i` of `x` is paired with element `i` of `y`. Pairs containing NaN are dropped,
/// as are pairs containing a zero when `policy` is [`ZeroPolicy::Exclude`]. The coefficient
/// is then computed over the remaining pairs with the sum-based formula
///
/// ```text
/// r = (n·Σxy − Σx·Σy) / sqrt[(n·Σx² − (Σx)²)·(n·Σy² − (Σy)²)]
/// ```
///
/// This function never fails. Every degenerate input yields `0`:
///
/// - sequences of different lengths, or an empty sequence
/// - fewer than two admitted pairs
/// - either admitted sequence is constant, or the denominator is zero
/// - a non-finite quotient
///
/// Any other result is clamped to `[-1, 1]` to absorb floating-point overshoot.
///
/// # Arguments
///
/// * `x` - The first sequence
/// * `y` - The second sequence, paired with `x` by index
/// * `policy` - Whether zero counts as a missing value
///
/// # Returns
///
/// * `T` - The correlation coefficient, or `0` for degenerate inputs
///
/// # Examples
///
/// ```
/// use survey_statistics::{correlation, ZeroPolicy};
/// use assert_approx_eq::assert_approx_eq;
///
/// let phone_time = [252.0_f64, 355.0, 243.0, 258.0, 343.0];
/// let recovery = [84.0, 76.0, 111.0, 82.0, 68.0];
///
/// let r = correlation(&phone_time, &recovery, ZeroPolicy::Exclude);
/// assert_approx_eq!(r, -0.7328, 0.001);
///
/// // lengths differ
/// assert_eq!(correlation(&phone_time, &recovery[..4], ZeroPolicy::Exclude), 0.0);
/// ```
pub fn correlation<T>(x: &[T], y: &[T], policy: ZeroPolicy) -> T
where
    T: Default + Float,
{
    if x.len() != y.len() || x.is_empty() {
        log::debug!(
            "correlation fallback: sequence lengths {} and {}",
            x.len(),
            y.len()
        );
        return T::zero();
    }

    let admitted = || {
        x.iter()
            .zip(y)
            .map(|(&a, &b)| (a, b))
            .filter(move |&pair| policy.admits_pair(pair))
    };
    let sums: PairedSums<T> = admitted().collect();

    if sums.len() < 2 {
        log::debug!(
            "correlation fallback: {} valid pairs out of {}",
            sums.len(),
            x.len()
        );
        return T::zero();
    }

    if is_constant(admitted().map(|(a, _)| a)) || is_constant(admitted().map(|(_, b)| b)) {
        log::debug!("correlation fallback: constant sequence");
        return T::zero();
    }

    let denominator = (sums.spread_x() * sums.spread_y()).sqrt();
    if denominator.is_zero() {
        log::debug!("correlation fallback: zero variance");
        return T::zero();
    }

    let r = sums.co_spread() / denominator;
    if !r.is_finite() {
        log::debug!("correlation fallback: non-finite coefficient");
        return T::zero();
    }

    r.max(-T::one()).min(T::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_perfect_positive_and_negative() {
        let x = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let up = [2.0, 4.0, 6.0, 8.0, 10.0];
        let down = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert_approx_eq!(correlation(&x, &up, ZeroPolicy::Exclude), 1.0);
        assert_approx_eq!(correlation(&x, &down, ZeroPolicy::Exclude), -1.0);
    }

    #[test]
    fn test_self_correlation_is_one() {
        let x = [3.2_f64, 1.5, 8.8, 4.1, 2.7, 6.6];
        assert_approx_eq!(correlation(&x, &x, ZeroPolicy::Exclude), 1.0);
    }

    #[test]
    fn test_symmetric() {
        let x = [0.496714_f64, -0.138264, 0.647689, 1.523030, -0.234153];
        let y = [0.115991, -0.329650, 0.574363, 0.109481, -1.026366];
        let xy = correlation(&x, &y, ZeroPolicy::Exclude);
        let yx = correlation(&y, &x, ZeroPolicy::Exclude);
        assert_eq!(xy, yx);
        assert_approx_eq!(xy, 0.6657, 0.001);
    }

    #[test]
    fn test_mismatched_or_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(correlation(&empty, &empty, ZeroPolicy::Exclude), 0.0);
        assert_eq!(correlation(&[1.0, 2.0], &[1.0], ZeroPolicy::Include), 0.0);
    }

    #[test]
    fn test_too_few_valid_pairs() {
        let x = [1.0, 0.0, 3.0, f64::NAN];
        let y = [2.0, 5.0, 0.0, 4.0];
        assert_eq!(correlation(&x, &y, ZeroPolicy::Exclude), 0.0);
    }

    #[test]
    fn test_zero_policy() {
        let x = [0.0_f64, 1.0, 2.0, 3.0];
        let y = [9.0, 1.0, 2.0, 3.0];
        // the (0, 9) pair is noise when it is counted
        assert_approx_eq!(correlation(&x, &y, ZeroPolicy::Exclude), 1.0);
        assert!(correlation(&x, &y, ZeroPolicy::Include) < 0.0);
    }

    #[test]
    fn test_no_variance() {
        let x = [4.0, 4.0, 4.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(correlation(&x, &y, ZeroPolicy::Exclude), 0.0);
        assert_eq!(correlation(&y, &x, ZeroPolicy::Exclude), 0.0);
    }

    #[test]
    fn test_no_variance_inexact_values() {
        let y = [1.0, 2.0, 6.0];
        for v in [7.3, 3.3, 0.7, 252.7] {
            assert_eq!(correlation(&[v; 3], &y, ZeroPolicy::Exclude), 0.0);
            assert_eq!(correlation(&y, &[v; 3], ZeroPolicy::Exclude), 0.0);
        }
        // the excluded zero pair leaves a constant x behind
        let x = [7.3, 7.3, 0.0, 7.3];
        let y = [1.0, 2.0, 3.0, 6.0];
        assert_eq!(correlation(&x, &y, ZeroPolicy::Exclude), 0.0);
        assert!(correlation(&x, &y, ZeroPolicy::Include) != 0.0);
    }

    #[test]
    fn test_non_finite_result() {
        let x = [f64::MAX, -f64::MAX, 1.0];
        let y = [1.0, 2.0, 3.0];
        let r = correlation(&x, &y, ZeroPolicy::Exclude);
        assert!(r.is_finite());
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_bounded() {
        let x = [1e-8_f64, 2e-8, 3e-8, 4e-8];
        let y = [1e8, 2e8, 3e8, 4e8 + 1.0];
        let r = correlation(&x, &y, ZeroPolicy::Exclude);
        assert!((-1.0..=1.0).contains(&r));
        assert_approx_eq!(r, 1.0, 1e-6);
    }

    #[test]
    fn test_f32() {
        let x = [1.0_f32, 2.0, 3.0];
        let y = [1.0_f32, 3.0, 2.0];
        assert_approx_eq!(correlation(&x, &y, ZeroPolicy::Exclude), 0.5_f32, 1e-5);
    }
}
