//! Calendar tenure between two dates.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::Tenure;

/// Number of days in the month preceding `date`'s month.
fn days_in_previous_month(date: NaiveDate) -> i32 {
    // The day before the 1st of this month is the last day of the previous one.
    date.checked_sub_days(Days::new(u64::from(date.day())))
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}

/// Breaks the interval from `hire` to `termination` into years, months and days.
///
/// Component differences are taken field by field. A negative day count
/// borrows the length of the month preceding the termination month; a
/// negative month count borrows twelve months. Callers must ensure
/// `hire <= termination`.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
///
/// let tenure = calculate_tenure(
///     NaiveDate::from_ymd_opt(2022, 3, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
/// );
/// assert_eq!(tenure.to_string(), "2 Yıl, 9 Ay, 21 Gün");
/// ```
pub fn calculate_tenure(hire: NaiveDate, termination: NaiveDate) -> Tenure {
    let mut years = termination.year() - hire.year();
    let mut months = termination.month() as i32 - hire.month() as i32;
    let mut days = termination.day() as i32 - hire.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(termination);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    // Hire on the 31st against a shorter preceding month can still leave a
    // negative remainder after one borrow.
    Tenure {
        years: years.max(0) as u32,
        months: months.max(0) as u32,
        days: days.max(0) as u32,
    }
}
