//! Report date range model.
//!
//! This module contains the [`DateRange`] type that bounds every period
//! report. Both ends are inclusive.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// An inclusive calendar date range.
///
/// A `DateRange` can only be constructed through [`DateRange::new`], which
/// rejects ranges whose start is after their end.
///
/// # Example
///
/// ```
/// use bordro_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.days_inclusive(), 31);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range, or `InvalidDateRange` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a given date falls within this range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days in the range, counting both ends.
    pub fn days_inclusive(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
