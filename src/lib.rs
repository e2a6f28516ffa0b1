//! Month-view calendar grid computation.
//!
//! Features:
//! - Whole-week month views with configurable week start
//! - Month navigation with year wraparound
//! - Single-date selection compared by calendar day
//! - Locale-aware weekday and month labels

pub mod args;
pub mod calendar;
pub mod config;
pub mod controller;
pub mod error;
pub mod formatter;
pub mod navigation;
pub mod selection;
pub mod types;

pub use controller::Calendar;
pub use error::CalendarError;
pub use navigation::{Cursor, Direction};
pub use types::{CalendarDay, CalendarGrid, Config, ConfigPatch};
