//! Reader module - readers and their progress through the reading schedule.

mod aggregate;
mod errors;
mod schedule;

pub use aggregate::{NewReader, Reader, ReaderName};
pub use errors::ReaderError;
pub use schedule::{DayNumber, DayRecord, ReadingProgress, SCHEDULE_DAYS};
