//! Daily attendance and lateness.
//!
//! An employee is present on a day if any log is dated on it; the first such
//! log's check-in decides lateness. A check-in strictly after the work start
//! time, compared to the minute, is late.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::{AttendanceSummary, Employee, LateArrival};

use super::duration::{minutes_since_midnight, parse_clock_time};

/// Summarizes who was present, late and absent on `date`.
///
/// # Arguments
///
/// * `employees` - The roster
/// * `date` - The day to summarize
/// * `work_start` - The configured work start time
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::summarize_attendance;
/// use bordro_engine::models::{Employee, TimeLog};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let mut ali = Employee::new("a", "Ali");
/// ali.time_logs.push(TimeLog {
///     id: "t1".to_string(),
///     date: day,
///     check_in: Some("08:45".to_string()),
///     check_out: None,
/// });
/// let banu = Employee::new("b", "Banu");
///
/// let summary = summarize_attendance(&[ali, banu], day, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert_eq!(summary.present, 1);
/// assert_eq!(summary.late, 1);
/// assert_eq!(summary.absent, 1);
/// assert_eq!(summary.attendance_rate, 50);
/// ```
pub fn summarize_attendance(
    employees: &[Employee],
    date: NaiveDate,
    work_start: NaiveTime,
) -> AttendanceSummary {
    let start_minutes = minutes_since_midnight(work_start);
    let mut present = 0u32;
    let mut late_arrivals = Vec::new();

    for employee in employees {
        let Some(log) = employee.log_on(date) else {
            continue;
        };
        present += 1;

        let Some(check_in) = log.check_in.as_deref().filter(|c| !c.trim().is_empty()) else {
            continue;
        };
        let Some(time_in) = parse_clock_time(check_in) else {
            warn!(
                employee_id = %employee.id,
                check_in = %check_in,
                "Unparseable check-in time; not counted as late"
            );
            continue;
        };

        let minutes_late = minutes_since_midnight(time_in) - start_minutes;
        if minutes_late > 0 {
            late_arrivals.push(LateArrival {
                employee_id: employee.id.clone(),
                employee_name: employee.full_name.clone(),
                check_in: check_in.trim().to_string(),
                minutes_late,
            });
        }
    }

    let total = employees.len() as u32;
    let late = late_arrivals.len() as u32;

    AttendanceSummary {
        date,
        work_start_time: work_start.format("%H:%M").to_string(),
        total,
        present,
        late,
        absent: total - present,
        attendance_rate: attendance_rate(present, total),
        late_arrivals,
    }
}

/// Present / total as a whole percentage, halves rounded up.
fn attendance_rate(present: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (Decimal::from(present) * Decimal::from(100) / Decimal::from(total))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
