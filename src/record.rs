use alloc::string::String;
use core::{fmt, str::FromStr};

/// Version of the participant record layout described by [`ParticipantRecord`]
pub const SCHEMA_VERSION: u32 = 1;

/// Self-reported sex of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    /// Female
    #[cfg_attr(feature = "serde", serde(rename = "f"))]
    Female,
    /// Male
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Male,
}

impl Sex {
    /// Both variants, female first
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Returns the display label
    pub const fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// One survey entry of a study participant.
///
/// Numeric measurements that were not recorded are stored as `0`. The two clinical scores
/// were added to the survey later and are absent from early entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantRecord {
    /// Participant identifier
    pub id: u32,
    /// Entry date as written on the survey, `M/D/YY` or `M/D/YYYY`
    pub date: String,
    /// Age in years
    pub age: u32,
    /// Self-reported sex
    pub sex: Sex,
    /// Daily phone time in minutes
    #[cfg_attr(feature = "serde", serde(alias = "phoneTime"))]
    pub phone_time: f64,
    /// Depression score
    pub depression: f64,
    /// Anxiety score
    pub anxiety: f64,
    /// Sleep quality score
    pub sleep: f64,
    /// Recovery score
    pub recovery: f64,
    /// Mobile phone problematic use score
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "Mobile_Phone_Problematic_Use_Score",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub problematic_use_score: Option<f64>,
    /// Advanced warning of relapse score
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "Advanced_Warning_of_Relapse_Score",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub relapse_warning_score: Option<f64>,
}

impl ParticipantRecord {
    /// Returns the value of a metric, `0` when an optional score is absent
    #[inline]
    pub fn metric(&self, metric: Metric) -> f64 {
        metric.value(self)
    }
}

/// The fields of a new survey entry, before the store assigns its id and date
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewParticipant {
    /// Age in years
    pub age: u32,
    /// Self-reported sex
    pub sex: Sex,
    /// Daily phone time in minutes
    #[cfg_attr(feature = "serde", serde(default, alias = "phoneTime"))]
    pub phone_time: f64,
    /// Depression score
    #[cfg_attr(feature = "serde", serde(default))]
    pub depression: f64,
    /// Anxiety score
    #[cfg_attr(feature = "serde", serde(default))]
    pub anxiety: f64,
    /// Sleep quality score
    #[cfg_attr(feature = "serde", serde(default))]
    pub sleep: f64,
    /// Recovery score
    #[cfg_attr(feature = "serde", serde(default))]
    pub recovery: f64,
    /// Mobile phone problematic use score
    #[cfg_attr(feature = "serde", serde(default))]
    pub problematic_use_score: Option<f64>,
    /// Advanced warning of relapse score
    #[cfg_attr(feature = "serde", serde(default))]
    pub relapse_warning_score: Option<f64>,
}

impl NewParticipant {
    /// Builds the stored record under the given id and date
    pub fn into_record(self, id: u32, date: String) -> ParticipantRecord {
        ParticipantRecord {
            id,
            date,
            age: self.age,
            sex: self.sex,
            phone_time: self.phone_time,
            depression: self.depression,
            anxiety: self.anxiety,
            sleep: self.sleep,
            recovery: self.recovery,
            problematic_use_score: self.problematic_use_score,
            relapse_warning_score: self.relapse_warning_score,
        }
    }
}

/// A numeric column of [`ParticipantRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Metric {
    /// Daily phone time in minutes
    PhoneTime,
    /// Depression score
    Depression,
    /// Anxiety score
    Anxiety,
    /// Sleep quality score
    Sleep,
    /// Recovery score
    Recovery,
    /// Mobile phone problematic use score
    ProblematicUse,
    /// Advanced warning of relapse score
    RelapseWarning,
}

impl Metric {
    /// Every metric, in column order
    pub const ALL: [Metric; 7] = [
        Metric::PhoneTime,
        Metric::Depression,
        Metric::Anxiety,
        Metric::Sleep,
        Metric::Recovery,
        Metric::ProblematicUse,
        Metric::RelapseWarning,
    ];

    /// Returns the display label
    pub const fn label(self) -> &'static str {
        match self {
            Metric::PhoneTime => "Screen Time",
            Metric::Depression => "Depression",
            Metric::Anxiety => "Anxiety",
            Metric::Sleep => "Sleep Quality",
            Metric::Recovery => "Recovery",
            Metric::ProblematicUse => "Mobile Phone Use",
            Metric::RelapseWarning => "Relapse Warning",
        }
    }

    /// Returns the command-line name
    pub const fn name(self) -> &'static str {
        match self {
            Metric::PhoneTime => "phone-time",
            Metric::Depression => "depression",
            Metric::Anxiety => "anxiety",
            Metric::Sleep => "sleep",
            Metric::Recovery => "recovery",
            Metric::ProblematicUse => "problematic-use",
            Metric::RelapseWarning => "relapse-warning",
        }
    }

    /// Reads this metric from a record
    pub fn value(self, record: &ParticipantRecord) -> f64 {
        match self {
            Metric::PhoneTime => record.phone_time,
            Metric::Depression => record.depression,
            Metric::Anxiety => record.anxiety,
            Metric::Sleep => record.sleep,
            Metric::Recovery => record.recovery,
            Metric::ProblematicUse => record.problematic_use_score.unwrap_or(0.0),
            Metric::RelapseWarning => record.relapse_warning_score.unwrap_or(0.0),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a metric name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric `{0}`, expected one of: phone-time, depression, anxiety, sleep, recovery, problematic-use, relapse-warning")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| ParseMetricError(String::from(s)))
    }
}
