use num_traits::Float;

use crate::{Kbn, helper::count_as};

/// Running sums over a sample of paired values.
///
/// `PairedSums<T>` accumulates the raw power sums (Σx, Σy, Σx², Σy², Σxy) that the closed-form
/// correlation and least-squares formulas are built from. Every sum is kept with
/// Kahan-Babuska-Neumaier compensation, so long samples with large magnitudes do not lose
/// the low-order digits the spread terms depend on.
#[derive(Debug, Clone)]
pub struct PairedSums<T> {
    /// Number of pairs accumulated
    len: usize,
    /// Sum of inputs
    sum: (Kbn<T>, Kbn<T>),
    /// Sum of squares
    sum_sq: (Kbn<T>, Kbn<T>),
    /// Sum of products
    sum_prod: Kbn<T>,
}

impl<T> PairedSums<T>
where
    T: Default + Float,
{
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self {
            len: 0,
            sum: Default::default(),
            sum_sq: Default::default(),
            sum_prod: Default::default(),
        }
    }

    /// Adds a pair to the sums
    ///
    /// # Arguments
    ///
    /// * `value` - A tuple containing the paired values (x, y)
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The accumulator for method chaining
    pub fn next(&mut self, (x, y): (T, T)) -> &mut Self {
        self.len += 1;
        self.sum.0 += x;
        self.sum.1 += y;
        self.sum_sq.0 += x * x;
        self.sum_sq.1 += y * y;
        self.sum_prod += x * y;
        self
    }

    /// Returns the number of pairs accumulated
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no pair has been accumulated
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of pairs as `T`
    pub fn n(&self) -> T {
        count_as(self.len)
    }

    /// Returns (Σx, Σy)
    pub fn sum(&self) -> (T, T) {
        (self.sum.0.total(), self.sum.1.total())
    }

    /// Returns (Σx², Σy²)
    pub fn sum_sq(&self) -> (T, T) {
        (self.sum_sq.0.total(), self.sum_sq.1.total())
    }

    /// Returns Σxy
    pub fn sum_prod(&self) -> T {
        self.sum_prod.total()
    }

    /// Returns (x̄, ȳ), or `None` if the accumulator is empty
    pub fn mean(&self) -> Option<(T, T)> {
        if self.is_empty() {
            return None;
        }
        let n = self.n();
        let (sx, sy) = self.sum();
        Some((sx / n, sy / n))
    }

    /// Returns n·Σx² − (Σx)², n² times the population variance of x
    pub fn spread_x(&self) -> T {
        let (sx, _) = self.sum();
        self.n() * self.sum_sq().0 - sx * sx
    }

    /// Returns n·Σy² − (Σy)², n² times the population variance of y
    pub fn spread_y(&self) -> T {
        let (_, sy) = self.sum();
        self.n() * self.sum_sq().1 - sy * sy
    }

    /// Returns n·Σxy − Σx·Σy, n² times the population covariance
    pub fn co_spread(&self) -> T {
        let (sx, sy) = self.sum();
        self.n() * self.sum_prod() - sx * sy
    }
}

impl<T> Default for PairedSums<T>
where
    T: Default + Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, T)> for PairedSums<T>
where
    T: Default + Float,
{
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for pair in iter {
            self.next(pair);
        }
    }
}

impl<T> FromIterator<(T, T)> for PairedSums<T>
where
    T: Default + Float,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut sums = Self::new();
        sums.extend(iter);
        sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_empty() {
        let sums: PairedSums<f64> = PairedSums::new();
        assert!(sums.is_empty());
        assert_eq!(sums.mean(), None);
        assert_eq!(sums.spread_x(), 0.0);
    }

    #[test]
    fn test_sums() {
        let sums: PairedSums<f64> = [(1.0, 2.0), (2.0, 4.0), (3.0, 7.0)].into_iter().collect();
        assert_eq!(sums.len(), 3);
        assert_eq!(sums.sum(), (6.0, 13.0));
        assert_eq!(sums.sum_sq(), (14.0, 69.0));
        assert_eq!(sums.sum_prod(), 31.0);
        let (mx, my) = sums.mean().unwrap_or_default();
        assert_approx_eq!(mx, 2.0);
        assert_approx_eq!(my, 13.0 / 3.0);
    }

    #[test]
    fn test_spreads() {
        let sums: PairedSums<f64> = [(1.0, 2.0), (2.0, 4.0), (3.0, 7.0)].into_iter().collect();
        // 3 * 14 - 36
        assert_approx_eq!(sums.spread_x(), 6.0);
        // 3 * 69 - 169
        assert_approx_eq!(sums.spread_y(), 38.0);
        // 3 * 31 - 78
        assert_approx_eq!(sums.co_spread(), 15.0);
    }

    #[test]
    fn test_constant_x_has_no_spread() {
        let sums: PairedSums<f64> = [(5.0, 1.0), (5.0, 2.0), (5.0, 9.0)].into_iter().collect();
        assert_eq!(sums.spread_x(), 0.0);
    }

    #[test]
    fn test_default_is_empty() {
        let sums = PairedSums::<f32>::default();
        assert!(sums.is_empty());
        assert_eq!(sums.sum(), (0.0, 0.0));
    }

    #[test]
    fn test_compensated_large_magnitudes() {
        let mut sums = PairedSums::new();
        sums.next((1_000_000.1_f64, 1.0))
            .next((1_000_000.2, 2.0))
            .next((1_000_000.3, 3.0));
        assert_approx_eq!(sums.sum().0, 3_000_000.6, 1e-6);
    }
}
