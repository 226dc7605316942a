//! The fixed reading schedule and a reader's progress through it.
//!
//! Storage keeps one sparse row per (reader, day). The read model is a
//! dense array with one slot per schedule day, rebuilt by
//! [`ReadingProgress::from_records`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ReaderId, ValidationError};

/// Number of days in the reading schedule.
pub const SCHEDULE_DAYS: usize = 30;

/// A day of the schedule, always within `1..=SCHEDULE_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DayNumber(u8);

impl DayNumber {
    pub const FIRST: DayNumber = DayNumber(1);
    pub const LAST: DayNumber = DayNumber(SCHEDULE_DAYS as u8);

    /// Creates a day number.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `day` is outside `1..=30`
    pub fn new(day: i64) -> Result<Self, ValidationError> {
        if !(1..=SCHEDULE_DAYS as i64).contains(&day) {
            return Err(ValidationError::out_of_range(
                "day_number",
                1,
                SCHEDULE_DAYS as i64,
                day,
            ));
        }
        Ok(Self(day as u8))
    }

    /// Every day of the schedule in ascending order.
    pub fn all() -> impl Iterator<Item = DayNumber> {
        (1..=SCHEDULE_DAYS as u8).map(DayNumber)
    }

    pub fn get(&self) -> i64 {
        i64::from(self.0)
    }

    /// Zero-based slot of this day in a progress array.
    pub fn index(&self) -> usize {
        usize::from(self.0) - 1
    }
}

impl TryFrom<i64> for DayNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayNumber> for i64 {
    fn from(day: DayNumber) -> Self {
        day.get()
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored completion flag.
///
/// `day_number` is kept raw: rows are read back as stored, and rows outside
/// the schedule are filtered when building [`ReadingProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub reader_id: ReaderId,
    pub day_number: i64,
    pub completed: bool,
}

/// Dense per-day completion flags for one reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingProgress([bool; SCHEDULE_DAYS]);

impl ReadingProgress {
    /// Progress of a reader who has not completed any day.
    pub fn unmarked() -> Self {
        Self([false; SCHEDULE_DAYS])
    }

    /// Builds the dense array from stored records.
    ///
    /// Slots without a record stay `false`. Records whose day number falls
    /// outside the schedule are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DayRecord>,
    {
        let mut progress = Self::unmarked();
        for record in records {
            match DayNumber::new(record.day_number) {
                Ok(day) => progress.0[day.index()] = record.completed,
                Err(_) => tracing::warn!(
                    reader_id = %record.reader_id,
                    day_number = record.day_number,
                    "ignoring day record outside the reading schedule"
                ),
            }
        }
        progress
    }

    pub fn is_completed(&self, day: DayNumber) -> bool {
        self.0[day.index()]
    }

    pub fn completed_days(&self) -> usize {
        self.0.iter().filter(|done| **done).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}
