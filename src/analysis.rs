use alloc::vec::Vec;
use num_traits::Float;

use crate::{
    Kbn, Metric, ParticipantRecord, Sex, Summary, TrendLine, ZeroPolicy, correlation,
    helper::count_as, summary, trend_line,
};

/// Significance level attached to correlation results unless configured otherwise
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Outcomes phone time is correlated against, in report order
pub const PHONE_TIME_OUTCOMES: [Metric; 4] = [
    Metric::Recovery,
    Metric::Depression,
    Metric::Anxiety,
    Metric::Sleep,
];

/// Metrics compared between sexes, in report order
pub const COMPARISON_METRICS: [Metric; 6] = [
    Metric::ProblematicUse,
    Metric::RelapseWarning,
    Metric::PhoneTime,
    Metric::Depression,
    Metric::Anxiety,
    Metric::Sleep,
];

/// Correlation of phone time with one outcome
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationResult {
    /// The outcome metric
    pub variable: Metric,
    /// Pearson coefficient in `[-1, 1]`
    pub correlation: f64,
    /// Significance level the coefficient is reported at
    pub significance: f64,
}

/// Per-sex means of one metric
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SexComparison {
    /// The compared metric
    pub metric: Metric,
    /// Mean over female participants
    pub female: f64,
    /// Mean over male participants
    pub male: f64,
}

/// Points of a two-metric scatter plot with the fitted trend line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scatter {
    /// Metric on the x axis
    pub x: Metric,
    /// Metric on the y axis
    pub y: Metric,
    /// The plotted (x, y) points
    pub points: Vec<(f64, f64)>,
    /// Least-squares line through `points`
    pub trend: TrendLine<f64>,
}

/// Mental-health scores of one entry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MentalHealthRow {
    /// Participant identifier
    pub id: u32,
    /// Depression score
    pub depression: f64,
    /// Anxiety score
    pub anxiety: f64,
    /// Sleep quality score
    pub sleep: f64,
}

/// Headline figures of the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardMetrics {
    /// Mean of recorded phone times, rounded to the nearest minute
    pub average_phone_time: f64,
    /// Mean of recorded recovery scores, rounded
    pub average_recovery: f64,
    /// Number of entries from female participants
    pub female_count: usize,
    /// Number of entries from male participants
    pub male_count: usize,
    /// Number of entries
    pub participant_count: usize,
}

/// Returns one metric of every record, in record order
pub fn metric_column(records: &[ParticipantRecord], metric: Metric) -> Vec<f64> {
    records.iter().map(|r| metric.value(r)).collect()
}

/// Returns the descriptive summary of one metric
///
/// # Examples
///
/// ```
/// use survey_statistics::{metric_summary, sample_participants, Metric, ZeroPolicy};
///
/// let s = metric_summary(&sample_participants(), Metric::Sleep, ZeroPolicy::Exclude);
/// assert_eq!((s.min, s.max), (6.0, 16.0));
/// ```
pub fn metric_summary(
    records: &[ParticipantRecord],
    metric: Metric,
    policy: ZeroPolicy,
) -> Summary<f64> {
    summary(&metric_column(records, metric), policy)
}

/// Correlates phone time with recovery, depression, anxiety and sleep
///
/// Only entries where all five measurements were recorded (strictly positive) take part,
/// so every coefficient is computed over the same participants.
///
/// # Arguments
///
/// * `records` - The participant entries
/// * `policy` - Zero handling passed on to [`correlation`]
/// * `significance` - Significance level reported with each result
///
/// # Returns
///
/// * `Vec<CorrelationResult>` - One result per entry of [`PHONE_TIME_OUTCOMES`]
pub fn phone_time_correlations(
    records: &[ParticipantRecord],
    policy: ZeroPolicy,
    significance: f64,
) -> Vec<CorrelationResult> {
    let complete: Vec<&ParticipantRecord> = records
        .iter()
        .filter(|r| {
            r.phone_time > 0.0 && r.recovery > 0.0 && r.depression > 0.0 && r.anxiety > 0.0 && r.sleep > 0.0
        })
        .collect();

    log::debug!(
        "correlating phone time over {} of {} entries",
        complete.len(),
        records.len()
    );

    let phone_time: Vec<f64> = complete.iter().map(|r| r.phone_time).collect();

    PHONE_TIME_OUTCOMES
        .iter()
        .map(|&variable| {
            let outcome: Vec<f64> = complete.iter().map(|r| variable.value(r)).collect();
            CorrelationResult {
                variable,
                correlation: correlation(&phone_time, &outcome, policy),
                significance,
            }
        })
        .collect()
}

/// Mean of the strictly positive values, `None` if there are none
fn positive_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = Kbn::<f64>::default();
    let mut n = 0usize;
    for v in values.filter(|&v| v > 0.0) {
        sum += v;
        n += 1;
    }
    (n > 0).then(|| sum.total() / count_as::<f64>(n))
}

/// Compares the mean of each metric in [`COMPARISON_METRICS`] between sexes
///
/// A mean only covers recorded (strictly positive) values; a sex with no recorded value
/// for a metric gets `0`.
///
/// # Examples
///
/// ```
/// use survey_statistics::{sample_participants, sex_comparison, Metric};
///
/// let rows = sex_comparison(&sample_participants());
/// let phone = rows.iter().find(|r| r.metric == Metric::PhoneTime).unwrap();
/// assert_eq!(phone.female, 355.0);
/// ```
pub fn sex_comparison(records: &[ParticipantRecord]) -> Vec<SexComparison> {
    let mean_of = |sex: Sex, metric: Metric| {
        positive_mean(
            records
                .iter()
                .filter(|r| r.sex == sex)
                .map(|r| metric.value(r)),
        )
        .unwrap_or(0.0)
    };

    COMPARISON_METRICS
        .iter()
        .map(|&metric| SexComparison {
            metric,
            female: mean_of(Sex::Female, metric),
            male: mean_of(Sex::Male, metric),
        })
        .collect()
}

/// Builds a scatter series of two metrics with its least-squares trend line
///
/// Entries where either metric was not recorded (not strictly positive) are left out.
/// Without any remaining point the series is empty and the trend line is all zero.
///
/// # Examples
///
/// ```
/// use survey_statistics::{sample_participants, scatter, Metric};
///
/// let s = scatter(&sample_participants(), Metric::PhoneTime, Metric::Recovery);
/// assert_eq!(s.points.len(), 11);
/// assert_eq!((s.trend.min_x, s.trend.max_x), (50.0, 466.0));
/// ```
pub fn scatter(records: &[ParticipantRecord], x: Metric, y: Metric) -> Scatter {
    let points: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (x.value(r), y.value(r)))
        .filter(|&(px, py)| px > 0.0 && py > 0.0)
        .collect();
    let trend = trend_line(&points);
    Scatter {
        x,
        y,
        points,
        trend,
    }
}

/// Returns the depression, anxiety and sleep scores of entries where all three were recorded
pub fn mental_health_series(records: &[ParticipantRecord]) -> Vec<MentalHealthRow> {
    records
        .iter()
        .filter(|r| r.depression > 0.0 && r.anxiety > 0.0 && r.sleep > 0.0)
        .map(|r| MentalHealthRow {
            id: r.id,
            depression: r.depression,
            anxiety: r.anxiety,
            sleep: r.sleep,
        })
        .collect()
}

/// Computes the headline figures of the dashboard
///
/// # Examples
///
/// ```
/// use survey_statistics::{dashboard_metrics, sample_participants};
///
/// let m = dashboard_metrics(&sample_participants());
/// assert_eq!(m.average_phone_time, 291.0);
/// assert_eq!((m.female_count, m.male_count, m.participant_count), (4, 11, 15));
/// ```
pub fn dashboard_metrics(records: &[ParticipantRecord]) -> DashboardMetrics {
    let rounded_mean = |metric: Metric| {
        positive_mean(records.iter().map(|r| metric.value(r)))
            .map(Float::round)
            .unwrap_or(0.0)
    };

    DashboardMetrics {
        average_phone_time: rounded_mean(Metric::PhoneTime),
        average_recovery: rounded_mean(Metric::Recovery),
        female_count: records.iter().filter(|r| r.sex == Sex::Female).count(),
        male_count: records.iter().filter(|r| r.sex == Sex::Male).count(),
        participant_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_participants;
    use alloc::{string::String, vec};
    use assert_approx_eq::assert_approx_eq;

    fn entry(id: u32, sex: Sex, values: [f64; 5]) -> ParticipantRecord {
        let [phone_time, depression, anxiety, sleep, recovery] = values;
        ParticipantRecord {
            id,
            date: String::from("1/1/2025"),
            age: 30,
            sex,
            phone_time,
            depression,
            anxiety,
            sleep,
            recovery,
            problematic_use_score: None,
            relapse_warning_score: None,
        }
    }

    #[test]
    fn test_phone_time_correlations_order_and_bounds() {
        let results =
            phone_time_correlations(&sample_participants(), ZeroPolicy::Exclude, DEFAULT_SIGNIFICANCE);
        let variables: Vec<Metric> = results.iter().map(|r| r.variable).collect();
        assert_eq!(variables, PHONE_TIME_OUTCOMES.to_vec());
        for r in &results {
            assert!((-1.0..=1.0).contains(&r.correlation));
            assert_eq!(r.significance, 0.05);
        }
    }

    #[test]
    fn test_phone_time_correlations_use_complete_entries() {
        let records = [
            entry(1, Sex::Female, [100.0, 1.0, 1.0, 1.0, 10.0]),
            entry(2, Sex::Male, [200.0, 2.0, 2.0, 2.0, 20.0]),
            entry(3, Sex::Male, [300.0, 3.0, 3.0, 3.0, 30.0]),
            // incomplete, would break the perfect fit
            entry(4, Sex::Male, [400.0, 0.0, 9.0, 1.0, 1.0]),
        ];
        let results = phone_time_correlations(&records, ZeroPolicy::Include, 0.01);
        for r in &results {
            assert_approx_eq!(r.correlation, 1.0);
            assert_eq!(r.significance, 0.01);
        }
    }

    #[test]
    fn test_phone_time_correlations_empty() {
        let results = phone_time_correlations(&[], ZeroPolicy::Exclude, DEFAULT_SIGNIFICANCE);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.correlation == 0.0));
    }

    #[test]
    fn test_sex_comparison() {
        let mut records = vec![
            entry(1, Sex::Female, [100.0, 4.0, 0.0, 6.0, 10.0]),
            entry(2, Sex::Female, [300.0, 8.0, 0.0, 0.0, 20.0]),
            entry(3, Sex::Male, [50.0, 2.0, 5.0, 7.0, 30.0]),
        ];
        records[0].problematic_use_score = Some(12.0);

        let rows = sex_comparison(&records);
        let metrics: Vec<Metric> = rows.iter().map(|r| r.metric).collect();
        assert_eq!(metrics, COMPARISON_METRICS.to_vec());

        let get = |m: Metric| rows.iter().find(|r| r.metric == m).copied();
        assert_eq!(
            get(Metric::PhoneTime),
            Some(SexComparison { metric: Metric::PhoneTime, female: 200.0, male: 50.0 })
        );
        assert_eq!(get(Metric::Anxiety).map(|r| (r.female, r.male)), Some((0.0, 5.0)));
        assert_eq!(get(Metric::Sleep).map(|r| r.female), Some(6.0));
        assert_eq!(get(Metric::ProblematicUse).map(|r| (r.female, r.male)), Some((12.0, 0.0)));
        assert_eq!(get(Metric::RelapseWarning).map(|r| (r.female, r.male)), Some((0.0, 0.0)));
    }

    #[test]
    fn test_sex_comparison_single_sex() {
        let records = [entry(1, Sex::Male, [60.0, 1.0, 1.0, 1.0, 1.0])];
        let rows = sex_comparison(&records);
        assert!(rows.iter().all(|r| r.female == 0.0));
    }

    #[test]
    fn test_scatter_filters_unrecorded() {
        let records = [
            entry(1, Sex::Female, [1.0, 0.0, 0.0, 0.0, 3.0]),
            entry(2, Sex::Female, [2.0, 0.0, 0.0, 0.0, 5.0]),
            entry(3, Sex::Male, [0.0, 0.0, 0.0, 0.0, 50.0]),
            entry(4, Sex::Male, [3.0, 0.0, 0.0, 0.0, 7.0]),
        ];
        let s = scatter(&records, Metric::PhoneTime, Metric::Recovery);
        assert_eq!(s.points, vec![(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        assert_approx_eq!(s.trend.slope, 2.0);
        assert_approx_eq!(s.trend.intercept, 1.0);
        assert_eq!((s.trend.min_x, s.trend.max_x), (1.0, 3.0));
    }

    #[test]
    fn test_scatter_empty() {
        let records = [entry(1, Sex::Female, [0.0, 1.0, 1.0, 1.0, 0.0])];
        let s = scatter(&records, Metric::PhoneTime, Metric::Recovery);
        assert!(s.points.is_empty());
        assert_eq!(s.trend, TrendLine::zero());
    }

    #[test]
    fn test_mental_health_series() {
        let rows = mental_health_series(&sample_participants());
        // entries 12, 14 and 15 each miss a score
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.id != 12 && r.id != 14 && r.id != 15));
        assert_eq!(
            rows[0],
            MentalHealthRow { id: 1, depression: 11.0, anxiety: 19.0, sleep: 7.0 }
        );
    }

    #[test]
    fn test_dashboard_metrics() {
        let m = dashboard_metrics(&sample_participants());
        assert_eq!(m.average_phone_time, 291.0);
        assert_eq!(m.average_recovery, 87.0);
        assert_eq!(m.female_count, 4);
        assert_eq!(m.male_count, 11);
        assert_eq!(m.participant_count, 15);
    }

    #[test]
    fn test_dashboard_metrics_empty() {
        let m = dashboard_metrics(&[]);
        assert_eq!(m.average_phone_time, 0.0);
        assert_eq!(m.average_recovery, 0.0);
        assert_eq!(m.participant_count, 0);
    }

    #[test]
    fn test_metric_summary() {
        let s = metric_summary(&sample_participants(), Metric::Recovery, ZeroPolicy::Include);
        assert_eq!(s.min, 0.0);
        let s = metric_summary(&sample_participants(), Metric::Recovery, ZeroPolicy::Exclude);
        assert_eq!(s.min, 57.0);
        assert_eq!(s.max, 113.0);
    }
}
