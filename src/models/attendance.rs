//! Daily attendance summary models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee who checked in after the work start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateArrival {
    /// The employee ID.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The recorded check-in time (`HH:MM`).
    pub check_in: String,
    /// Minutes after the work start time.
    pub minutes_late: i64,
}

/// Who was present, late and absent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The day summarized.
    pub date: NaiveDate,
    /// The work start time lateness is measured against (`HH:MM`).
    pub work_start_time: String,
    /// Employees on the roster.
    pub total: u32,
    /// Employees with a log on the day.
    pub present: u32,
    /// Present employees who checked in after the start time.
    pub late: u32,
    /// Employees with no log on the day.
    pub absent: u32,
    /// Present / total as a whole percentage.
    pub attendance_rate: u32,
    /// Late arrivals in roster order.
    pub late_arrivals: Vec<LateArrival>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serialization() {
        let summary = AttendanceSummary {
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            work_start_time: "08:30".to_string(),
            total: 2,
            present: 1,
            late: 1,
            absent: 1,
            attendance_rate: 50,
            late_arrivals: vec![LateArrival {
                employee_id: "a".to_string(),
                employee_name: "Ali".to_string(),
                check_in: "08:45".to_string(),
                minutes_late: 15,
            }],
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["date"], "2025-01-06");
        assert_eq!(json["attendance_rate"], 50);
        assert_eq!(json["late_arrivals"][0]["minutes_late"], 15);
    }
}
