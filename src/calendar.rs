//! Month-view boundary calculation and grid generation.
//!
//! A view always covers whole weeks: it starts on the configured first day of
//! the week on or before the 1st, and ends on the last weekday of the row that
//! contains the month's last day.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::navigation::Cursor;
use crate::types::{CalendarDay, CalendarGrid, Config, DAYS_PER_WEEK, MONTHS_PER_YEAR};

/// Which edge of the month view to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// First date of the first row.
    Start,
    /// Last date of the last row.
    End,
}

/// Resolve an arbitrary zero-based month into `(year, month0)`.
///
/// `-1` is December of the previous year, `12` is January of the next.
/// Returns `None` if the resulting year does not fit in `i32`.
pub fn normalize_month(year: i32, month: i32) -> Option<(i32, u32)> {
    let months = MONTHS_PER_YEAR as i64;
    let total = i64::from(year) * months + i64::from(month);
    let year = i32::try_from(total.div_euclid(months)).ok()?;
    Some((year, total.rem_euclid(months) as u32))
}

/// Number of days from the week start to `weekday`, in `0..7`.
pub fn days_from_week_start(weekday: Weekday, first_day_of_week: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - first_day_of_week.num_days_from_sunday()) % 7
}

fn first_of_month(year: i32, month: i32) -> Option<NaiveDate> {
    let (year, month0) = normalize_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// First or last date shown in the view of `month` (zero-based, any integer).
///
/// Returns `None` only when the date falls outside chrono's supported range.
pub fn boundary(
    year: i32,
    month: i32,
    first_day_of_week: Weekday,
    edge: Boundary,
) -> Option<NaiveDate> {
    match edge {
        Boundary::Start => {
            let first = first_of_month(year, month)?;
            let offset = days_from_week_start(first.weekday(), first_day_of_week);
            first.checked_sub_days(Days::new(u64::from(offset)))
        }
        Boundary::End => {
            // Day 0 of the next month
            let last = first_of_month(year, month.checked_add(1)?)?.pred_opt()?;
            // Fill the row up to the day before the next week start
            let offset = 6 - days_from_week_start(last.weekday(), first_day_of_week);
            last.checked_add_days(Days::new(u64::from(offset)))
        }
    }
}

/// Number of days in a zero-based month.
pub fn days_in_month(year: i32, month: i32) -> Option<u32> {
    let first = first_of_month(year, month)?;
    let last = first_of_month(year, month.checked_add(1)?)?.pred_opt()?;
    Some(last.signed_duration_since(first).num_days() as u32 + 1)
}

/// Enumerate every day of the view for `cursor`, in chronological order.
///
/// `today` is the caller's evaluation date, `selected` the current selection.
/// The result length is always a multiple of seven.
pub fn generate_days(
    cursor: Cursor,
    config: &Config,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Result<Vec<CalendarDay>, CalendarError> {
    let year = cursor.year();
    let month = cursor.month() as i32;
    let out_of_range = || CalendarError::OutOfRange { year, month };

    let start = boundary(year, month, config.first_day_of_week, Boundary::Start)
        .ok_or_else(out_of_range)?;
    let end = boundary(year, month, config.first_day_of_week, Boundary::End)
        .ok_or_else(out_of_range)?;
    trace!(%start, %end, "month view boundaries");

    let days: Vec<CalendarDay> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.month0() == cursor.month(),
            is_today: date == today,
            is_selected: selected == Some(date),
            initial_display_date: config.initial_date,
        })
        .collect();

    debug!(year, month = cursor.month(), days = days.len(), "generated month view");
    Ok(days)
}

/// Partition a flat day sequence into week rows, preserving order.
///
/// Input produced by [`generate_days`] always divides evenly into rows; any
/// other length is rejected instead of dropping the partial row.
pub fn to_grid(days: &[CalendarDay]) -> Result<CalendarGrid, CalendarError> {
    if days.len() % DAYS_PER_WEEK != 0 {
        return Err(CalendarError::IncompleteWeek { days: days.len() });
    }
    let rows = days
        .chunks_exact(DAYS_PER_WEEK)
        .map(<[CalendarDay; DAYS_PER_WEEK]>::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CalendarError::IncompleteWeek { days: days.len() })?;
    Ok(CalendarGrid { rows })
}

impl CalendarGrid {
    /// Build the week rows for `cursor`.
    pub fn new(
        cursor: Cursor,
        config: &Config,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Result<Self, CalendarError> {
        let days = generate_days(cursor, config, today, selected)?;
        to_grid(&days)
    }
}
