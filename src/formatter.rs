//! Locale-aware labels and plain-text rendering of a month view.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{CalendarDay, CalendarGrid, DAYS_PER_WEEK, MONTHS_PER_YEAR};

/// Source of human-readable calendar labels.
///
/// The grid logic never depends on a particular implementation, so a
/// table-backed formatter can replace [`ChronoLabels`] per target.
pub trait LabelFormatter {
    /// Seven abbreviated weekday names, starting at `first_day_of_week`.
    fn weekdays(&self, first_day_of_week: Weekday, locale: &str) -> [String; DAYS_PER_WEEK];

    /// "Month YYYY" title for a zero-based month.
    fn month_title(&self, month: u32, year: i32, locale: &str) -> String;
}

/// Labels from chrono's locale tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoLabels;

impl LabelFormatter for ChronoLabels {
    fn weekdays(&self, first_day_of_week: Weekday, locale: &str) -> [String; DAYS_PER_WEEK] {
        let locale = locale_or_default(locale);
        let order = get_weekday_order(first_day_of_week);
        std::array::from_fn(|i| get_weekday_short_name(order[i], locale))
    }

    fn month_title(&self, month: u32, year: i32, locale: &str) -> String {
        let locale = locale_or_default(locale);
        format!("{} {}", get_month_name(month, locale), year)
    }
}

/// Resolve a locale tag (`en-US`, `en_US.UTF-8`, `de_DE@euro`) to a chrono locale.
pub fn resolve_locale(tag: &str) -> Option<Locale> {
    tag.split('.')
        .next()
        .unwrap_or_default()
        .split('@')
        .next()
        .unwrap_or_default()
        .replace('-', "_")
        .parse()
        .ok()
}

/// Like [`resolve_locale`], falling back to `en_US` for unknown tags.
///
/// Silent: unknown tags are reported once, when the configuration is merged.
pub fn locale_or_default(tag: &str) -> Locale {
    resolve_locale(tag).unwrap_or(Locale::en_US)
}

/// Weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut day = week_start;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Abbreviated weekday name for `locale`.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    // 2000-01-02 was a Sunday
    let date = NaiveDate::from_ymd_opt(2000, 1, 2 + weekday.num_days_from_sunday());
    match date {
        Some(date) => date.format_localized("%a", locale).to_string(),
        None => format!("{:?}", weekday),
    }
}

/// Month name in nominative case for a zero-based month.
pub fn get_month_name(month: u32, locale: Locale) -> String {
    let index = (month % MONTHS_PER_YEAR) as usize;

    // chrono yields the genitive form ("января") for these locales
    match locale {
        Locale::ru_RU => [
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ][index]
            .to_string(),
        Locale::uk_UA => [
            "Січень",
            "Лютий",
            "Березень",
            "Квітень",
            "Травень",
            "Червень",
            "Липень",
            "Серпень",
            "Вересень",
            "Жовтень",
            "Листопад",
            "Грудень",
        ][index]
            .to_string(),
        Locale::be_BY => [
            "Студзень",
            "Люты",
            "Сакавік",
            "Красавік",
            "Май",
            "Чэрвень",
            "Ліпень",
            "Жнівень",
            "Верасень",
            "Кастрычнік",
            "Лістапад",
            "Снежань",
        ][index]
            .to_string(),
        _ => match NaiveDate::from_ymd_opt(2000, index as u32 + 1, 1) {
            Some(date) => date.format_localized("%B", locale).to_string(),
            None => String::new(),
        },
    }
}

// Plain-text rendering used by the CLI. Every cell is CELL_WIDTH columns.
pub const CELL_WIDTH: usize = 4;
const LABEL_WIDTH: usize = CELL_WIDTH - 1;

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Cut `text` to at most `width` display columns.
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Weekday header row, one cell per label.
pub fn format_weekday_headers(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| {
            let label = truncate_to_width(label, LABEL_WIDTH);
            let padding = LABEL_WIDTH.saturating_sub(label.width());
            format!("{}{} ", " ".repeat(padding), label)
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Format a day cell.
///
/// Marker priority: today `[dd]` > selected `<dd>` > filler `(dd)` > regular.
pub fn format_day(day: &CalendarDay) -> String {
    let (open, close) = if day.is_today {
        ('[', ']')
    } else if day.is_selected {
        ('<', '>')
    } else if !day.is_current_month {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    format!("{}{:>2}{}", open, day.date.day(), close)
}

/// Format the month view as lines: title, weekday header, one line per week.
pub fn format_month_grid(title: &str, weekdays: &[String], grid: &CalendarGrid) -> Vec<String> {
    let width = CELL_WIDTH * DAYS_PER_WEEK;
    let mut lines = Vec::with_capacity(grid.len() + 2);

    lines.push(center_text(title, width).trim_end().to_string());
    lines.push(format_weekday_headers(weekdays));
    for row in &grid.rows {
        let line: String = row.iter().map(format_day).collect();
        lines.push(line.trim_end().to_string());
    }

    lines
}
