//! Integration tests for the calendar controller, labels and text rendering.

use std::io;
use std::sync::{Arc, Mutex};

use chrono::{Datelike, NaiveDate, Weekday};

use monthgrid::formatter::{
    ChronoLabels, LabelFormatter, center_text, format_day, format_month_grid,
    format_weekday_headers, get_weekday_order, locale_or_default, resolve_locale,
};
use monthgrid::types::DAYS_PER_WEEK;
use monthgrid::{Calendar, CalendarDay, CalendarError, Config, ConfigPatch, Direction};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 3, 15)
}

fn test_calendar() -> Calendar {
    Calendar::with_today(Config::default(), today())
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

mod controller_tests {
    use super::*;

    #[test]
    fn test_seeded_from_today_without_initial_date() {
        let calendar = test_calendar();
        assert_eq!(calendar.month(), 2);
        assert_eq!(calendar.year(), 2024);
        assert_eq!(calendar.initial_display_date(), None);
    }

    #[test]
    fn test_seeded_from_initial_date() {
        let config = Config::from_patch(&ConfigPatch {
            initial_date: Some("2023-12-25".to_string()),
            ..ConfigPatch::default()
        })
        .unwrap();
        let calendar = Calendar::with_today(config, today());
        assert_eq!((calendar.month(), calendar.year()), (11, 2023));
        assert_eq!(calendar.initial_display_date(), Some(date(2023, 12, 25)));

        let grid = calendar.grid(today()).unwrap();
        assert!(
            grid.days()
                .all(|d| d.initial_display_date == Some(date(2023, 12, 25)))
        );
    }

    #[test]
    fn test_from_patch_rejects_malformed_initial_date() {
        let result = Calendar::from_patch(&ConfigPatch {
            initial_date: Some("2024-03".to_string()),
            ..ConfigPatch::default()
        });
        assert!(matches!(result, Err(CalendarError::InvalidDate { .. })));
    }

    #[test]
    fn test_march_2024_grid() {
        let calendar = test_calendar();
        let grid = calendar.grid(today()).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.first_day().unwrap().date, date(2024, 2, 25));
        assert_eq!(grid.last_day().unwrap().date, date(2024, 4, 6));
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_navigation_regenerates_grid() {
        let mut calendar = test_calendar();
        calendar.navigate(Direction::Previous);
        let grid = calendar.grid(today()).unwrap();
        assert_eq!((calendar.month(), calendar.year()), (1, 2024));
        assert_eq!(grid.days().filter(|d| d.is_current_month).count(), 29);
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 0);
        assert_eq!(calendar.title(), "February 2024");
    }

    #[test]
    fn test_navigation_across_year() {
        let mut calendar = test_calendar();
        for _ in 0..10 {
            calendar.navigate(Direction::Next);
        }
        assert_eq!((calendar.month(), calendar.year()), (0, 2025));
        assert_eq!(calendar.title(), "January 2025");
        let grid = calendar.grid(today()).unwrap();
        assert_eq!(grid.first_day().unwrap().date, date(2024, 12, 29));
    }

    #[test]
    fn test_selection_reflected_in_grid() {
        let mut calendar = test_calendar();
        calendar.select(&date(2024, 3, 20).and_hms_opt(18, 30, 0).unwrap());
        assert!(calendar.is_selected(&date(2024, 3, 20)));
        assert_eq!(calendar.selected(), Some(date(2024, 3, 20)));

        let selected: Vec<NaiveDate> = calendar
            .grid(today())
            .unwrap()
            .days()
            .filter(|d| d.is_selected)
            .map(|d| d.date)
            .collect();
        assert_eq!(selected, vec![date(2024, 3, 20)]);
    }

    #[test]
    fn test_selection_outside_view_highlights_nothing_until_reached() {
        let mut calendar = test_calendar();
        calendar.set_selection(Some(date(2024, 5, 2)));
        let grid = calendar.grid(today()).unwrap();
        assert_eq!(grid.days().filter(|d| d.is_selected).count(), 0);

        calendar.navigate(Direction::Next);
        calendar.navigate(Direction::Next);
        let grid = calendar.grid(today()).unwrap();
        assert_eq!(grid.days().filter(|d| d.is_selected).count(), 1);
    }

    #[test]
    fn test_deselect() {
        let mut calendar = test_calendar();
        calendar.select(&today());
        calendar.deselect();
        assert!(!calendar.is_selected(&today()));
        assert!(calendar.grid(today()).unwrap().days().all(|d| !d.is_selected));
    }

    #[test]
    fn test_set_configuration_changes_week_start() {
        let mut calendar = test_calendar();
        calendar
            .set_configuration(&ConfigPatch {
                first_day_of_week: Some(1),
                ..ConfigPatch::default()
            })
            .unwrap();
        let grid = calendar.grid(today()).unwrap();
        assert_eq!(grid.first_day().unwrap().date, date(2024, 2, 26));
        assert_eq!(grid.first_day().unwrap().date.weekday(), Weekday::Mon);
        assert_eq!(calendar.weekdays()[0], "Mon");
        assert_eq!((calendar.month(), calendar.year()), (2, 2024));
    }

    #[test]
    fn test_set_configuration_initial_date_reseeds_cursor() {
        let mut calendar = test_calendar();
        calendar
            .set_configuration(&ConfigPatch {
                initial_date: Some("2030-07-04".to_string()),
                ..ConfigPatch::default()
            })
            .unwrap();
        assert_eq!((calendar.month(), calendar.year()), (6, 2030));
        assert_eq!(calendar.initial_display_date(), Some(date(2030, 7, 4)));
    }

    #[test]
    fn test_rejected_configuration_keeps_state() {
        let mut calendar = test_calendar();
        calendar.navigate(Direction::Next);
        calendar.select(&date(2024, 4, 10));

        let result = calendar.set_configuration(&ConfigPatch {
            first_day_of_week: Some(9),
            initial_date: Some("2030-07-04".to_string()),
            ..ConfigPatch::default()
        });
        assert_eq!(result, Err(CalendarError::InvalidWeekday(9)));
        assert_eq!((calendar.month(), calendar.year()), (3, 2024));
        assert_eq!(calendar.selected(), Some(date(2024, 4, 10)));
        assert_eq!(calendar.config(), &Config::default());
    }

    #[test]
    fn test_outputs_are_recomputed_on_demand() {
        let calendar = test_calendar();
        assert_eq!(calendar.grid(today()), calendar.grid(today()));
        assert_eq!(calendar.days(today()).unwrap().len(), 42);
    }

    #[test]
    fn test_grid_now_contains_today() {
        let calendar = Calendar::new(Config::default());
        let grid = calendar.grid_now().unwrap();
        // Cursor and evaluation date both come from the local clock.
        assert!(grid.days().filter(|d| d.is_today).count() <= 1);
        assert!(grid.len() >= 4 && grid.len() <= 6);
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn test_weekdays_sunday_start() {
        let names = ChronoLabels.weekdays(Weekday::Sun, "en-US");
        assert_eq!(names, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }

    #[test]
    fn test_weekdays_follow_week_start() {
        let names = ChronoLabels.weekdays(Weekday::Wed, "en-US");
        assert_eq!(names, ["Wed", "Thu", "Fri", "Sat", "Sun", "Mon", "Tue"]);
    }

    #[test]
    fn test_weekday_order() {
        assert_eq!(get_weekday_order(Weekday::Mon)[0], Weekday::Mon);
        assert_eq!(get_weekday_order(Weekday::Mon)[6], Weekday::Sun);
        assert_eq!(get_weekday_order(Weekday::Sat)[1], Weekday::Sun);
    }

    #[test]
    fn test_month_title_english() {
        assert_eq!(ChronoLabels.month_title(2, 2024, "en-US"), "March 2024");
        assert_eq!(ChronoLabels.month_title(11, 1999, "en_US.UTF-8"), "December 1999");
    }

    #[test]
    fn test_month_title_german() {
        assert_eq!(ChronoLabels.month_title(2, 2024, "de-DE"), "März 2024");
    }

    #[test]
    fn test_month_title_nominative_cyrillic() {
        assert_eq!(ChronoLabels.month_title(0, 2026, "ru-RU"), "Январь 2026");
        assert_eq!(ChronoLabels.month_title(1, 2026, "uk_UA"), "Лютий 2026");
        assert_eq!(ChronoLabels.month_title(11, 2026, "be_BY"), "Снежань 2026");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(resolve_locale("xx-YY"), None);
        assert_eq!(locale_or_default("xx-YY"), chrono::Locale::en_US);
        assert_eq!(ChronoLabels.month_title(4, 2024, "klingon"), "May 2024");
    }

    #[test]
    fn test_posix_locale_tags() {
        assert_eq!(resolve_locale("de_DE.UTF-8"), Some(chrono::Locale::de_DE));
        assert_eq!(resolve_locale("de_DE@euro"), Some(chrono::Locale::de_DE));
        assert_eq!(resolve_locale("ru-RU"), Some(chrono::Locale::ru_RU));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn count(&self, needle: &str) -> usize {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .matches(needle)
                .count()
        }
    }

    #[test]
    fn test_unknown_locale_warned_once_per_merge() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut calendar = Calendar::with_today(
                Config::from_patch(&ConfigPatch {
                    locale: Some("klingon".to_string()),
                    ..ConfigPatch::default()
                })
                .unwrap(),
                today(),
            );
            for _ in 0..3 {
                assert_eq!(calendar.weekdays()[0], "Sun");
                calendar.title();
                calendar.navigate(Direction::Next);
            }
        });
        assert_eq!(logs.count("unknown locale"), 1);

        let logs_known = CapturedLogs::default();
        let writer = logs_known.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            Config::from_patch(&ConfigPatch {
                locale: Some("de-DE".to_string()),
                ..ConfigPatch::default()
            })
            .unwrap();
        });
        assert_eq!(logs_known.count("unknown locale"), 0);
    }

    struct FixedLabels;

    impl LabelFormatter for FixedLabels {
        fn weekdays(&self, first_day_of_week: Weekday, _locale: &str) -> [String; DAYS_PER_WEEK] {
            let order = get_weekday_order(first_day_of_week);
            std::array::from_fn(|i| format!("{:?}", order[i]).to_uppercase())
        }

        fn month_title(&self, month: u32, year: i32, _locale: &str) -> String {
            format!("{}/{}", month + 1, year)
        }
    }

    #[test]
    fn test_custom_formatter() {
        let mut calendar = Calendar::with_formatter(Config::default(), today(), FixedLabels);
        assert_eq!(calendar.title(), "3/2024");
        assert_eq!(calendar.weekdays()[0], "SUN");
        calendar.navigate(Direction::Next);
        assert_eq!(calendar.title(), "4/2024");
        // Grid logic is independent of the formatter
        assert_eq!(calendar.grid(today()).unwrap().len(), 5);
    }
}

mod format_tests {
    use super::*;

    fn day(date: NaiveDate, is_current_month: bool, is_today: bool, is_selected: bool) -> CalendarDay {
        CalendarDay {
            date,
            is_current_month,
            is_today,
            is_selected,
            initial_display_date: None,
        }
    }

    #[test]
    fn test_format_day_markers() {
        let d = date(2024, 3, 5);
        assert_eq!(format_day(&day(d, true, false, false)), "  5 ");
        assert_eq!(format_day(&day(d, false, false, false)), "( 5)");
        assert_eq!(format_day(&day(d, true, false, true)), "< 5>");
        assert_eq!(format_day(&day(d, true, true, true)), "[ 5]");
        assert_eq!(format_day(&day(date(2024, 3, 15), true, true, false)), "[15]");
    }

    #[test]
    fn test_center_text() {
        assert_eq!(center_text("ab", 6), "  ab  ");
        assert_eq!(center_text("abc", 6), "  abc ");
        assert_eq!(center_text("toolong", 3), "toolong");
    }

    #[test]
    fn test_weekday_headers_fit_cells() {
        let header = format_weekday_headers(&labels(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]));
        assert_eq!(header, "Sun Mon Tue Wed Thu Fri Sat");

        let header = format_weekday_headers(&labels(&["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]));
        assert_eq!(header, " So  Mo  Di  Mi  Do  Fr  Sa");

        let header = format_weekday_headers(&labels(&["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."]));
        assert_eq!(header, "dim lun mar mer jeu ven sam");
    }

    #[test]
    fn test_month_grid_lines() {
        let mut calendar = test_calendar();
        calendar.select(&date(2024, 3, 20));
        let grid = calendar.grid(today()).unwrap();
        let lines = format_month_grid(&calendar.title(), &calendar.weekdays(), &grid);

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "         March 2024");
        assert_eq!(lines[1], "Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], "(25)(26)(27)(28)(29)  1   2");
        assert_eq!(lines[3], "  3   4   5   6   7   8   9");
        assert_eq!(lines[4], " 10  11  12  13  14 [15] 16");
        assert_eq!(lines[5], " 17  18  19 <20> 21  22  23");
        assert_eq!(lines[7], " 31 ( 1)( 2)( 3)( 4)( 5)( 6)");
    }
}
