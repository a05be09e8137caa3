use alloc::{string::String, vec::Vec};

use crate::{Metric, NewParticipant, ParticipantRecord};

/// Errors returned by a [`ParticipantStore`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// No entry has the requested id
    #[error("participant {0} not found")]
    NotFound(u32),
    /// The entry failed validation
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Data access for participant entries.
///
/// Analyses receive a store from their caller rather than reaching for a shared global
/// client; the caller decides how the store is created and when it is dropped.
pub trait ParticipantStore {
    /// Returns every entry, oldest date first
    fn list(&self) -> Vec<ParticipantRecord>;

    /// Validates and stores a new entry under the next free id and the given date
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if a measurement is negative or NaN, or the date is
    /// empty.
    fn create(&mut self, entry: NewParticipant, date: &str) -> Result<ParticipantRecord, StoreError>;

    /// Removes every entry with the given id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry has that id.
    fn delete(&mut self, id: u32) -> Result<(), StoreError>;

    /// Returns the number of stored entries
    fn count(&self) -> usize;
}

/// Parses an `M/D/YY` or `M/D/YYYY` date into a (year, month, day) sort key
///
/// Two-digit years are read as 20YY.
pub fn parse_date(date: &str) -> Option<(u32, u32, u32)> {
    let mut parts = date.trim().split('/');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let year: u32 = year_str.parse().ok()?;
    let year = match year_str.len() {
        2 => 2000 + year,
        4 => year,
        _ => return None,
    };
    ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some((year, month, day))
}

impl ParticipantRecord {
    /// Checks the entry before it is stored or analysed
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if a measurement is negative or NaN, or the date is
    /// empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.date.trim().is_empty() {
            return Err(StoreError::Invalid {
                field: "date",
                reason: "must not be empty",
            });
        }
        for metric in Metric::ALL {
            let value = metric.value(self);
            if value.is_nan() || value < 0.0 {
                return Err(StoreError::Invalid {
                    field: metric.name(),
                    reason: "must be a non-negative number",
                });
            }
        }
        Ok(())
    }
}

/// A [`ParticipantStore`] held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<ParticipantRecord>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given entries
    ///
    /// Entries are taken as they are, duplicate ids included.
    pub fn with_records(records: Vec<ParticipantRecord>) -> Self {
        Self { records }
    }

    fn next_id(&self) -> u32 {
        self.records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |id| id.saturating_add(1))
    }
}

impl ParticipantStore for MemoryStore {
    fn list(&self) -> Vec<ParticipantRecord> {
        let mut records = self.records.clone();
        // unparseable dates go last
        records.sort_by_cached_key(|r| {
            let date = parse_date(&r.date);
            (date.is_none(), date, r.id)
        });
        records
    }

    fn create(&mut self, entry: NewParticipant, date: &str) -> Result<ParticipantRecord, StoreError> {
        let record = entry.into_record(self.next_id(), String::from(date));
        record.validate()?;
        log::info!("created participant {} dated {}", record.id, record.date);
        self.records.push(record.clone());
        Ok(record)
    }

    fn delete(&mut self, id: u32) -> Result<(), StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            log::warn!("delete of unknown participant {id}");
            return Err(StoreError::NotFound(id));
        }
        log::info!("deleted participant {id}");
        Ok(())
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}
