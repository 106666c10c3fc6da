//! Time-clock duration calculation.
//!
//! This module turns a check-in/check-out pair of `HH:MM` strings into
//! worked hours. Bad data never aborts a report: a missing time counts as
//! zero hours, and an unparseable time counts as zero hours and is logged.
//!
//! ## Rules
//!
//! - A check-out earlier than the check-in is an overnight shift: 24 hours
//!   are added to the check-out before differencing.
//! - The result is never negative.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use tracing::warn;

/// Minutes in one day, added to overnight check-outs.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a time-of-day string to minute precision.
///
/// Accepts `H:MM`, `HH:MM` and `HH:MM:SS`; seconds are dropped.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_clock_time("08:30:59"), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_clock_time("8.30"), None);
/// ```
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()?;
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
}

/// Minutes since midnight for a parsed clock time.
pub(crate) fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Calculates the hours between a check-in and a check-out time.
///
/// # Arguments
///
/// * `check_in` - Check-in time of day, `HH:MM`
/// * `check_out` - Check-out time of day, `HH:MM`
///
/// # Returns
///
/// Elapsed hours as a Decimal. Zero when either time is missing or cannot
/// be parsed.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::calculate_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_duration(Some("09:00"), Some("17:30")), Decimal::new(85, 1));
/// assert_eq!(calculate_duration(Some("22:00"), Some("06:00")), Decimal::new(8, 0));
/// assert_eq!(calculate_duration(Some("09:00"), None), Decimal::ZERO);
/// ```
pub fn calculate_duration(check_in: Option<&str>, check_out: Option<&str>) -> Decimal {
    let (Some(check_in), Some(check_out)) = (present(check_in), present(check_out)) else {
        return Decimal::ZERO;
    };

    let (Some(time_in), Some(time_out)) = (parse_clock_time(check_in), parse_clock_time(check_out))
    else {
        warn!(
            check_in = %check_in,
            check_out = %check_out,
            "Unparseable time-clock entry counted as zero hours"
        );
        return Decimal::ZERO;
    };

    let minutes_in = minutes_since_midnight(time_in);
    let mut minutes_out = minutes_since_midnight(time_out);
    if minutes_out < minutes_in {
        minutes_out += MINUTES_PER_DAY;
    }

    let worked_minutes = minutes_out - minutes_in;
    if worked_minutes > 0 {
        Decimal::from(worked_minutes) / Decimal::from(60)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_day_shift() {
        assert_eq!(calculate_duration(Some("08:30"), Some("17:30")), dec("9"));
    }

    #[test]
    fn test_overnight_shift_adds_24_hours() {
        assert_eq!(calculate_duration(Some("22:00"), Some("06:00")), dec("8"));
    }

    #[test]
    fn test_overnight_shift_across_minutes() {
        // 23:45 -> 00:15 is 30 minutes
        assert_eq!(calculate_duration(Some("23:45"), Some("00:15")), dec("0.5"));
    }

    #[test]
    fn test_equal_times_yield_zero() {
        assert_eq!(calculate_duration(Some("09:00"), Some("09:00")), Decimal::ZERO);
    }

    #[test]
    fn test_missing_times_yield_zero() {
        assert_eq!(calculate_duration(None, Some("17:00")), Decimal::ZERO);
        assert_eq!(calculate_duration(Some("09:00"), None), Decimal::ZERO);
        assert_eq!(calculate_duration(Some(""), Some("17:00")), Decimal::ZERO);
        assert_eq!(calculate_duration(Some("09:00"), Some("  ")), Decimal::ZERO);
    }

    #[test]
    fn test_malformed_times_yield_zero() {
        assert_eq!(calculate_duration(Some("nine"), Some("17:00")), Decimal::ZERO);
        assert_eq!(calculate_duration(Some("09:00"), Some("25:00")), Decimal::ZERO);
        assert_eq!(calculate_duration(Some("09:60"), Some("17:00")), Decimal::ZERO);
    }

    #[test]
    fn test_single_digit_hour_is_accepted() {
        assert_eq!(calculate_duration(Some("8:00"), Some("16:30")), dec("8.5"));
    }

    #[test]
    fn test_seconds_are_ignored() {
        assert_eq!(
            calculate_duration(Some("08:00:45"), Some("09:00:10")),
            dec("1")
        );
    }

    #[test]
    fn test_twenty_minutes_is_one_third_hour() {
        let hours = calculate_duration(Some("10:00"), Some("10:20"));
        assert_eq!(hours.round_dp(4), dec("0.3333"));
    }

    #[test]
    fn test_parse_clock_time_truncates_seconds() {
        assert_eq!(
            parse_clock_time("17:05:30"),
            NaiveTime::from_hms_opt(17, 5, 0)
        );
        assert_eq!(parse_clock_time(" 07:15 "), NaiveTime::from_hms_opt(7, 15, 0));
        assert_eq!(parse_clock_time(""), None);
    }
}
