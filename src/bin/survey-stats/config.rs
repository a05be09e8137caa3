use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};
use survey_statistics::{DEFAULT_SIGNIFICANCE, ParticipantRecord, SCHEMA_VERSION, ZeroPolicy};

/// Analysis settings.
///
/// Loaded from a TOML file and validated before use; every field may be omitted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether a zero measurement counts as missing.
    pub zero_policy: ZeroPolicy,
    /// Significance level reported with correlations.
    pub significance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zero_policy: ZeroPolicy::Exclude,
            significance: DEFAULT_SIGNIFICANCE,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.significance, 0.0..=1.0).context("invalid significance level")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

/// A file of participant entries.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordsFile {
    /// Layout version of the entries.
    #[serde(default = "current_schema")]
    pub schema_version: u32,
    /// The entries, one `[[participant]]` table each.
    #[serde(default)]
    pub participant: Vec<ParticipantRecord>,
}

fn current_schema() -> u32 {
    SCHEMA_VERSION
}

impl RecordsFile {
    /// Load participant entries from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized,
    /// or if it was written for another schema version.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Vec<ParticipantRecord>> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let records: RecordsFile =
            toml::from_str(&contents).context("failed to deserialize records")?;

        if records.schema_version != SCHEMA_VERSION {
            bail!(
                "records use schema version {}, but only version {SCHEMA_VERSION} is supported",
                records.schema_version
            );
        }

        for record in &records.participant {
            record
                .validate()
                .with_context(|| format!("participant {}", record.id))?;
        }

        Ok(records.participant)
    }
}
