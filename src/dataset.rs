use alloc::{string::String, vec::Vec};

use crate::{ParticipantRecord, Sex};

type Row = (u32, &'static str, u32, Sex, [f64; 5]);

// id, date, age, sex, [phone time, depression, anxiety, sleep, recovery]
const SAMPLE: [Row; 15] = [
    (1, "1/14/25", 34, Sex::Female, [252.0, 11.0, 19.0, 7.0, 84.0]),
    (2, "12/28/24", 39, Sex::Female, [355.0, 11.0, 5.0, 9.0, 76.0]),
    (3, "12/31/24", 25, Sex::Male, [243.0, 19.0, 26.0, 9.0, 111.0]),
    (3, "1/17/25", 25, Sex::Male, [0.0, 18.0, 12.0, 7.0, 97.0]),
    (5, "1/9/2025", 39, Sex::Male, [258.0, 11.0, 9.0, 6.0, 82.0]),
    (6, "1/10/2025", 32, Sex::Male, [343.0, 6.0, 3.0, 7.0, 68.0]),
    (7, "1/11/2025", 31, Sex::Male, [247.0, 3.0, 23.0, 7.0, 57.0]),
    (8, "1/11/2025", 44, Sex::Male, [300.0, 6.0, 5.0, 10.0, 84.0]),
    (9, "1/13/2025", 38, Sex::Male, [383.0, 6.0, 10.0, 6.0, 92.0]),
    (10, "1/14/25", 40, Sex::Male, [451.0, 11.0, 8.0, 10.0, 79.0]),
    (11, "1/16/2025", 43, Sex::Male, [50.0, 7.0, 8.0, 12.0, 90.0]),
    (12, "1/16/2025", 50, Sex::Male, [90.0, 13.0, 15.0, 0.0, 0.0]),
    (13, "1/16/2025", 27, Sex::Male, [0.0, 14.0, 18.0, 8.0, 92.0]),
    (14, "1/17/2025", 18, Sex::Female, [466.0, 0.0, 18.0, 16.0, 113.0]),
    (15, "1/20/2025", 18, Sex::Female, [347.0, 0.0, 0.0, 0.0, 0.0]),
];

/// Returns the bundled sample of participant entries
///
/// The sample is kept as collected: participant 3 has two entries under the same id, and
/// several measurements are `0` because they were not recorded.
///
/// # Examples
///
/// ```
/// use survey_statistics::sample_participants;
///
/// let sample = sample_participants();
/// assert_eq!(sample.len(), 15);
/// assert_eq!(sample[0].phone_time, 252.0);
/// ```
pub fn sample_participants() -> Vec<ParticipantRecord> {
    SAMPLE
        .iter()
        .map(
            |&(id, date, age, sex, [phone_time, depression, anxiety, sleep, recovery])| {
                ParticipantRecord {
                    id,
                    date: String::from(date),
                    age,
                    sex,
                    phone_time,
                    depression,
                    anxiety,
                    sleep,
                    recovery,
                    problematic_use_score: None,
                    relapse_warning_score: None,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_composition() {
        let sample = sample_participants();
        assert_eq!(sample.iter().filter(|r| r.sex == Sex::Female).count(), 4);
        assert_eq!(sample.iter().filter(|r| r.sex == Sex::Male).count(), 11);
        assert_eq!(sample.iter().filter(|r| r.id == 3).count(), 2);
        assert_eq!(sample.iter().filter(|r| r.phone_time == 0.0).count(), 2);
    }
}
