//! Error type shared by configuration parsing and grid generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
    /// Weekday index outside 0-6.
    #[error("Invalid weekday index: {0} (must be 0-6)")]
    InvalidWeekday(u8),
    /// The requested month cannot be represented as a calendar date.
    #[error("Month out of range: {month}/{year}")]
    OutOfRange { year: i32, month: i32 },
    /// A day sequence does not divide into whole weeks.
    #[error("Day sequence of length {days} does not divide into whole weeks")]
    IncompleteWeek { days: usize },
}
