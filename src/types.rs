//! Type definitions and constants for month-view grid generation.

use chrono::{NaiveDate, Weekday};

/// A single cell of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Calendar date shown in the cell.
    pub date: NaiveDate,
    /// Whether the date belongs to the month being viewed (false for filler days).
    pub is_current_month: bool,
    /// Whether the date equals the evaluation-time "today".
    pub is_today: bool,
    /// Whether the date equals the current selection.
    pub is_selected: bool,
    /// Date the calendar was seeded with, attached to every day for consumer bookkeeping.
    pub initial_display_date: Option<NaiveDate>,
}

/// Week rows of a month view, each exactly [`DAYS_PER_WEEK`] days long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub rows: Vec<[CalendarDay; DAYS_PER_WEEK]>,
}

impl CalendarGrid {
    /// Number of week rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All days in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn first_day(&self) -> Option<&CalendarDay> {
        self.rows.first().map(|row| &row[0])
    }

    pub fn last_day(&self) -> Option<&CalendarDay> {
        self.rows.last().map(|row| &row[DAYS_PER_WEEK - 1])
    }
}

/// Calendar configuration with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// First column of every week row.
    pub first_day_of_week: Weekday,
    /// Weekend days. Used by renderers only, grid contents never depend on it.
    pub weekends: Vec<Weekday>,
    /// Locale tag for labels, e.g. `en-US` or `ru_RU`.
    pub locale: String,
    /// Date the cursor is seeded with; `None` means today.
    pub initial_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            first_day_of_week: Weekday::Sun,
            weekends: vec![Weekday::Sun, Weekday::Sat],
            locale: DEFAULT_LOCALE.to_string(),
            initial_date: None,
        }
    }
}

/// Partial configuration as supplied by a caller.
///
/// Values are raw (weekday indices, date strings) and validated on merge.
/// Omitted fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub first_day_of_week: Option<u8>,
    pub weekends: Option<Vec<u8>>,
    pub locale: Option<String>,
    /// `YYYY-MM-DD`.
    pub initial_date: Option<String>,
}

/// Convert a weekday index (0 = Sunday .. 6 = Saturday) into a [`Weekday`].
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Weekday index with Sunday as 0.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

// Constants for grid generation
pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;
/// Largest possible view: 6 weeks × 7 days.
pub const MAX_GRID_DAYS: usize = 42;

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Digit counts of the year, month and day fields in [`DATE_FORMAT`].
pub const DATE_FIELD_WIDTHS: [usize; 3] = [4, 2, 2];
