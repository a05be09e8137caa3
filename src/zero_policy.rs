use num_traits::Float;

/// Controls whether zero is read as a recorded value or as the "not recorded" sentinel.
///
/// Survey records store a missing measurement as `0`. Some callers filter those rows out
/// before computing anything, others rely on the statistics functions to do it, so the
/// choice is made explicitly on every call instead of being baked into the functions.
///
/// NaN is never admitted, whatever the policy.
///
/// # Examples
///
/// ```
/// use survey_statistics::ZeroPolicy;
///
/// assert!(!ZeroPolicy::Exclude.admits(0.0));
/// assert!(ZeroPolicy::Include.admits(0.0));
/// assert!(!ZeroPolicy::Include.admits(f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZeroPolicy {
    /// Zero marks a missing measurement and is dropped before computation
    #[default]
    Exclude,
    /// Zero is an ordinary measurement
    Include,
}

impl ZeroPolicy {
    /// Returns `true` if the value takes part in a computation under this policy
    ///
    /// # Arguments
    ///
    /// * `value` - The candidate value
    ///
    /// # Returns
    ///
    /// * `bool` - `false` for NaN, and for zero under [`ZeroPolicy::Exclude`]
    #[inline]
    pub fn admits<T: Float>(self, value: T) -> bool {
        if value.is_nan() {
            return false;
        }
        match self {
            Self::Exclude => !value.is_zero(),
            Self::Include => true,
        }
    }

    /// Returns `true` if both members of a pair are admitted
    #[inline]
    pub fn admits_pair<T: Float>(self, (x, y): (T, T)) -> bool {
        self.admits(x) && self.admits(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_zero() {
        assert_eq!(ZeroPolicy::default(), ZeroPolicy::Exclude);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(!ZeroPolicy::Exclude.admits(-0.0_f64));
        assert!(ZeroPolicy::Include.admits(-0.0_f64));
    }

    #[test]
    fn test_pairs() {
        assert!(ZeroPolicy::Exclude.admits_pair((1.0, 2.0)));
        assert!(!ZeroPolicy::Exclude.admits_pair((1.0, 0.0)));
        assert!(ZeroPolicy::Include.admits_pair((0.0, 0.0)));
        assert!(!ZeroPolicy::Include.admits_pair((f32::NAN, 1.0)));
    }
}
