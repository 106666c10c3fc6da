//! Time-clock log model.
//!
//! This module defines the [`TimeLog`] struct: one check-in/check-out pair
//! recorded for an employee on a calendar date.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_duration;

/// A single attendance record from the time clock or manual entry.
///
/// Times are kept as the raw `HH:MM` strings the roster stores. Missing or
/// malformed times are tolerated and count as zero worked hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLog {
    /// Unique identifier for the log entry.
    pub id: String,
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// Check-in time of day (`HH:MM`).
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out time of day (`HH:MM`). Earlier than `check_in` means an overnight shift.
    #[serde(default)]
    pub check_out: Option<String>,
}

impl TimeLog {
    /// Calculates the worked hours for this log.
    ///
    /// # Examples
    ///
    /// ```
    /// use bordro_engine::models::TimeLog;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let log = TimeLog {
    ///     id: "log_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
    ///     check_in: Some("22:00".to_string()),
    ///     check_out: Some("06:00".to_string()),
    /// };
    /// assert_eq!(log.worked_hours(), Decimal::new(8, 0));
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        calculate_duration(self.check_in.as_deref(), self.check_out.as_deref())
    }

    /// Returns the day of the week of the log date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true if the log falls on a Sunday (hafta tatili).
    pub fn is_sunday(&self) -> bool {
        self.day_of_week() == Weekday::Sun
    }
}
