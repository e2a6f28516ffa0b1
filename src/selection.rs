//! Single-date selection compared by calendar day.

use chrono::{Datelike, NaiveDate};

/// Whether two values denote the same calendar day, ignoring time of day.
pub fn same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Calendar date of any date-like value, dropping time of day.
pub fn calendar_date<D: Datelike>(date: &D) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
}

/// At most one selected date.
///
/// Selecting a date outside the displayed month is allowed; it is simply not
/// highlighted until navigation reaches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    date: Option<NaiveDate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with the calendar day of `date`.
    pub fn select<D: Datelike>(&mut self, date: &D) {
        self.date = calendar_date(date);
    }

    pub fn deselect(&mut self) {
        self.date = None;
    }

    /// Replace the selection unconditionally; `None` clears it.
    pub fn set(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn get(&self) -> Option<NaiveDate> {
        self.date
    }

    /// False when nothing is selected.
    pub fn is_selected<D: Datelike>(&self, date: &D) -> bool {
        self.date.is_some_and(|selected| same_day(&selected, date))
    }
}
