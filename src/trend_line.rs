use num_traits::Float;

use crate::{PairedSums, helper::min_max};

/// Ordinary least-squares line fitted through a set of (x, y) points.
///
/// `min_x` and `max_x` bound the x-values the line was fitted on; a chart draws the fitted
/// segment between [`TrendLine::endpoints`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendLine<T> {
    /// Slope of the fitted line
    pub slope: T,
    /// Value of the fitted line at `x = 0`
    pub intercept: T,
    /// Smallest x-value of the input points
    pub min_x: T,
    /// Largest x-value of the input points
    pub max_x: T,
}

impl<T: Float> TrendLine<T> {
    /// The all-zero line returned for fewer than two points
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            min_x: T::zero(),
            max_x: T::zero(),
        }
    }

    /// Evaluates the line at `x`
    #[inline]
    pub fn value_at(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Returns the points of the line at `min_x` and `max_x`
    ///
    /// # Examples
    ///
    /// ```
    /// use survey_statistics::trend_line;
    ///
    /// let line = trend_line(&[(1.0_f64, 3.0), (2.0, 5.0), (4.0, 9.0)]);
    /// let [(x0, y0), (x1, y1)] = line.endpoints();
    /// assert_eq!((x0, x1), (1.0, 4.0));
    /// assert!((y0 - 3.0).abs() < 1e-9 && (y1 - 9.0).abs() < 1e-9);
    /// ```
    pub fn endpoints(&self) -> [(T, T); 2] {
        [
            (self.min_x, self.value_at(self.min_x)),
            (self.max_x, self.value_at(self.max_x)),
        ]
    }
}

/// Fits an ordinary least-squares line through paired observations
///
/// Slope and intercept come from the closed-form sums:
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// The points are used as given, no value is filtered. This function never fails:
///
/// - fewer than two points yields [`TrendLine::zero`]
/// - identical x-values yield a flat line at the mean of y, with
///   `min_x`/`max_x` still reported
///
/// # Arguments
///
/// * `points` - The (x, y) observations
///
/// # Returns
///
/// * `TrendLine<T>` - The fitted line and the x-range of the input
///
/// # Examples
///
/// ```
/// use survey_statistics::trend_line;
/// use assert_approx_eq::assert_approx_eq;
///
/// let line = trend_line(&[(0.0_f64, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
/// assert_approx_eq!(line.slope, 2.0);
/// assert_approx_eq!(line.intercept, 1.0);
/// assert_eq!((line.min_x, line.max_x), (0.0, 3.0));
///
/// let flat = trend_line(&[(2.0_f64, 1.0), (2.0, 4.0)]);
/// assert_eq!(flat.slope, 0.0);
/// assert_eq!(flat.intercept, 2.5);
/// ```
pub fn trend_line<T>(points: &[(T, T)]) -> TrendLine<T>
where
    T: Default + Float,
{
    if points.len() < 2 {
        log::debug!("trend line fallback: {} points", points.len());
        return TrendLine::zero();
    }

    let sums: PairedSums<T> = points.iter().copied().collect();
    let (min_x, max_x) =
        min_max(points.iter().map(|&(x, _)| x)).unwrap_or((T::zero(), T::zero()));

    let n = sums.n();
    let (sum_x, sum_y) = sums.sum();
    let denominator = sums.spread_x();

    if min_x == max_x || denominator.is_zero() {
        log::debug!("trend line fallback: x-values have no variance");
        return TrendLine {
            slope: T::zero(),
            intercept: sum_y / n,
            min_x,
            max_x,
        };
    }

    let slope = sums.co_spread() / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    TrendLine {
        slope,
        intercept,
        min_x,
        max_x,
    }
}
