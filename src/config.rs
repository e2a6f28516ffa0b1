//! Configuration defaults, validation and partial overrides.

use chrono::{NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::error::CalendarError;
use crate::formatter::resolve_locale;
use crate::types::{Config, ConfigPatch, DATE_FIELD_WIDTHS, DATE_FORMAT, weekday_from_index};

/// Parse a `YYYY-MM-DD` string as a local calendar date.
///
/// Fields must be exactly four, two and two ASCII digits. Malformed input and
/// impossible dates (e.g. `2023-02-29`) are rejected rather than normalized.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = |reason: String| CalendarError::InvalidDate {
        input: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    let fields: Vec<&str> = trimmed.split('-').collect();
    if fields.len() != 3 {
        return Err(invalid(format!(
            "expected YYYY-MM-DD, found {} field(s)",
            fields.len()
        )));
    }

    for (field, width) in fields.iter().zip(DATE_FIELD_WIDTHS) {
        if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(format!(
                "expected YYYY-MM-DD, field '{}' must be {} digits",
                field, width
            )));
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}

fn parse_weekday(index: u8) -> Result<Weekday, CalendarError> {
    weekday_from_index(index).ok_or(CalendarError::InvalidWeekday(index))
}

impl Config {
    /// Defaults overridden by every field present in `patch`.
    pub fn from_patch(patch: &ConfigPatch) -> Result<Self, CalendarError> {
        let mut config = Config::default();
        config.merge(patch)?;
        Ok(config)
    }

    /// Apply the fields present in `patch`.
    ///
    /// All fields are validated before any is applied, so on error `self` is
    /// unchanged.
    pub fn merge(&mut self, patch: &ConfigPatch) -> Result<(), CalendarError> {
        let first_day_of_week = patch.first_day_of_week.map(parse_weekday).transpose()?;

        let weekends = match &patch.weekends {
            Some(indices) => {
                let mut days: Vec<Weekday> = Vec::with_capacity(indices.len());
                for &index in indices {
                    let day = parse_weekday(index)?;
                    if !days.contains(&day) {
                        days.push(day);
                    }
                }
                Some(days)
            }
            None => None,
        };

        let initial_date = patch
            .initial_date
            .as_deref()
            .map(parse_date)
            .transpose()?;

        if let Some(day) = first_day_of_week {
            self.first_day_of_week = day;
        }
        if let Some(days) = weekends {
            self.weekends = days;
        }
        if let Some(locale) = &patch.locale {
            if resolve_locale(locale).is_none() {
                warn!(locale = %locale, "unknown locale, labels fall back to en_US");
            }
            self.locale = locale.clone();
        }
        if let Some(date) = initial_date {
            self.initial_date = Some(date);
        }

        debug!(?patch, "configuration merged");
        Ok(())
    }

    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekends.contains(&weekday)
    }
}
