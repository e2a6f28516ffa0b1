//! Top-level calendar state: configuration, cursor and selection.
//!
//! Every output is derived from the current state on demand; nothing is cached,
//! so a read after `navigate`, `select` or `set_configuration` always observes it.

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, info};

use crate::calendar::generate_days;
use crate::error::CalendarError;
use crate::formatter::{ChronoLabels, LabelFormatter};
use crate::navigation::{Cursor, Direction};
use crate::selection::Selection;
use crate::types::{CalendarDay, CalendarGrid, Config, ConfigPatch, DAYS_PER_WEEK};

/// Local calendar date at the time of the call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone)]
pub struct Calendar<F: LabelFormatter = ChronoLabels> {
    config: Config,
    cursor: Cursor,
    selection: Selection,
    formatter: F,
}

impl Calendar {
    /// Calendar showing the configured initial date, or the current month.
    pub fn new(config: Config) -> Self {
        Self::with_today(config, today())
    }

    /// Like [`Calendar::new`], with an explicit "today" used when no initial date is set.
    pub fn with_today(config: Config, today: NaiveDate) -> Self {
        Self::with_formatter(config, today, ChronoLabels)
    }

    /// Defaults merged with raw caller values.
    pub fn from_patch(patch: &ConfigPatch) -> Result<Self, CalendarError> {
        Ok(Self::new(Config::from_patch(patch)?))
    }
}

impl<F: LabelFormatter> Calendar<F> {
    pub fn with_formatter(config: Config, today: NaiveDate, formatter: F) -> Self {
        let cursor = Cursor::from_date(&config.initial_date.unwrap_or(today));
        info!(
            month = cursor.month(),
            year = cursor.year(),
            locale = %config.locale,
            "calendar initialized"
        );
        Calendar {
            config,
            cursor,
            selection: Selection::new(),
            formatter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Zero-based displayed month.
    pub fn month(&self) -> u32 {
        self.cursor.month()
    }

    pub fn year(&self) -> i32 {
        self.cursor.year()
    }

    /// The date the calendar was seeded with, if any.
    pub fn initial_display_date(&self) -> Option<NaiveDate> {
        self.config.initial_date
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.cursor.navigate(direction);
    }

    /// Select the calendar day of `date`, replacing any previous selection.
    pub fn select<D: Datelike>(&mut self, date: &D) {
        self.selection.select(date);
        debug!(selected = ?self.selection.get(), "selection changed");
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
        debug!("selection cleared");
    }

    pub fn set_selection(&mut self, date: Option<NaiveDate>) {
        self.selection.set(date);
        debug!(selected = ?date, "selection changed");
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selection.get()
    }

    pub fn is_selected<D: Datelike>(&self, date: &D) -> bool {
        self.selection.is_selected(date)
    }

    /// Merge `patch` into the configuration.
    ///
    /// A new `initial_date` re-seeds the cursor. On error nothing changes.
    pub fn set_configuration(&mut self, patch: &ConfigPatch) -> Result<(), CalendarError> {
        self.config.merge(patch)?;
        if patch.initial_date.is_some()
            && let Some(date) = self.config.initial_date
        {
            self.cursor = Cursor::from_date(&date);
        }
        Ok(())
    }

    /// Flat day sequence of the displayed month, evaluated against `today`.
    pub fn days(&self, today: NaiveDate) -> Result<Vec<CalendarDay>, CalendarError> {
        generate_days(self.cursor, &self.config, today, self.selection.get())
    }

    /// Week rows of the displayed month, evaluated against `today`.
    pub fn grid(&self, today: NaiveDate) -> Result<CalendarGrid, CalendarError> {
        CalendarGrid::new(self.cursor, &self.config, today, self.selection.get())
    }

    /// Week rows evaluated against the current local date.
    pub fn grid_now(&self) -> Result<CalendarGrid, CalendarError> {
        self.grid(today())
    }

    /// Weekday labels starting at the configured first day of the week.
    pub fn weekdays(&self) -> [String; DAYS_PER_WEEK] {
        self.formatter
            .weekdays(self.config.first_day_of_week, &self.config.locale)
    }

    /// "Month YYYY" for the displayed month.
    pub fn title(&self) -> String {
        self.formatter
            .month_title(self.cursor.month(), self.cursor.year(), &self.config.locale)
    }
}
