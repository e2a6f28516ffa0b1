//! Month/year cursor and single-step navigation.

use chrono::Datelike;
use tracing::{debug, warn};

use crate::types::MONTHS_PER_YEAR;

/// Navigation step, one month at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed step: -1 for [`Direction::Previous`], +1 for [`Direction::Next`].
    pub fn step(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Parse a signed step; only -1 and +1 are accepted.
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }
}

/// The (month, year) pair identifying the displayed month.
///
/// The month is zero-based and always in `0..=11`; the year absorbs overflow.
/// No year bound is enforced beyond the range of `i32`; navigation stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    month: u32,
    year: i32,
}

impl Cursor {
    /// Create a cursor, carrying months above 11 into the year.
    pub fn new(year: i32, month: u32) -> Self {
        Cursor {
            month: month % MONTHS_PER_YEAR,
            year: year.saturating_add((month / MONTHS_PER_YEAR) as i32),
        }
    }

    /// Cursor pointing at the month containing `date`.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Cursor {
            month: date.month0(),
            year: date.year(),
        }
    }

    /// Zero-based month, `0..=11`.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Move one month in `direction`, wrapping across year boundaries.
    ///
    /// A step that would carry the year past `i32::MIN`/`i32::MAX` leaves the
    /// cursor where it is.
    pub fn navigate(&mut self, direction: Direction) {
        let new_month = self.month as i32 + direction.step();

        if new_month < 0 {
            let Some(year) = self.year.checked_sub(1) else {
                warn!(year = self.year, "cannot navigate before the first representable year");
                return;
            };
            self.month = MONTHS_PER_YEAR - 1;
            self.year = year;
        } else if new_month > (MONTHS_PER_YEAR - 1) as i32 {
            let Some(year) = self.year.checked_add(1) else {
                warn!(year = self.year, "cannot navigate past the last representable year");
                return;
            };
            self.month = 0;
            self.year = year;
        } else {
            self.month = new_month as u32;
        }

        debug!(month = self.month, year = self.year, ?direction, "navigated");
    }

    /// Cursor after one step in `direction`, leaving `self` untouched.
    pub fn stepped(mut self, direction: Direction) -> Self {
        self.navigate(direction);
        self
    }
}
