#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod zero_policy;
pub use zero_policy::ZeroPolicy;

mod paired_sums;
pub use paired_sums::PairedSums;

mod correlation;
pub use correlation::correlation;

mod summary;
pub use summary::{Summary, summary};

mod trend_line;
pub use trend_line::{TrendLine, trend_line};

mod record;
pub use record::{Metric, NewParticipant, ParseMetricError, ParticipantRecord, SCHEMA_VERSION, Sex};

mod dataset;
pub use dataset::sample_participants;

mod analysis;
pub use analysis::{
    COMPARISON_METRICS, CorrelationResult, DEFAULT_SIGNIFICANCE, DashboardMetrics,
    MentalHealthRow, PHONE_TIME_OUTCOMES, Scatter, SexComparison, dashboard_metrics,
    mental_health_series, metric_column, metric_summary, phone_time_correlations, scatter,
    sex_comparison,
};

mod store;
pub use store::{MemoryStore, ParticipantStore, StoreError, parse_date};
