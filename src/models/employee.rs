//! Employee model.
//!
//! This module defines the [`Employee`] struct: the personnel record the
//! engine reads from the roster snapshot. The engine never mutates it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Bonus, DateRange, Deduction, LeaveRecord, TimeLog};

/// Represents an employee together with the attendance and payroll records
/// attached to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (T.C. kimlik no).
    pub id: String,
    /// Internal registry number (sicil no).
    #[serde(default)]
    pub registry_no: Option<String>,
    /// Display name (ad soyad).
    pub full_name: String,
    /// Job title or department (görevi).
    #[serde(default)]
    pub position: Option<String>,
    /// Date of birth, used for the age-based leave minimum.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// The date the employee was hired (işe giriş tarihi).
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The date the employee left, if they have (işten ayrılış tarihi).
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Monthly gross salary.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Hourly rate used for overtime and undertime.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Time-clock logs, in roster order.
    #[serde(default)]
    pub time_logs: Vec<TimeLog>,
    /// One-off bonuses.
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
    /// One-off deductions.
    #[serde(default)]
    pub deductions: Vec<Deduction>,
    /// Leave records.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

impl Employee {
    /// Creates an employee with only an ID and name; all other fields empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bordro_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("12345678901", "Ayşe Yılmaz");
    /// assert_eq!(employee.base_salary, Decimal::ZERO);
    /// assert!(employee.time_logs.is_empty());
    /// ```
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            registry_no: None,
            full_name: full_name.into(),
            position: None,
            birth_date: None,
            hire_date: None,
            termination_date: None,
            base_salary: Decimal::ZERO,
            hourly_rate: Decimal::ZERO,
            time_logs: Vec::new(),
            bonuses: Vec::new(),
            deductions: Vec::new(),
            leaves: Vec::new(),
        }
    }

    /// Time logs whose date falls within the range.
    pub fn logs_in(&self, range: &DateRange) -> impl Iterator<Item = &TimeLog> {
        self.time_logs.iter().filter(move |log| range.contains(log.date))
    }

    /// Bonuses whose date falls within the range.
    pub fn bonuses_in(&self, range: &DateRange) -> impl Iterator<Item = &Bonus> {
        self.bonuses.iter().filter(move |b| range.contains(b.date))
    }

    /// Deductions whose date falls within the range.
    pub fn deductions_in(&self, range: &DateRange) -> impl Iterator<Item = &Deduction> {
        self.deductions
            .iter()
            .filter(move |d| range.contains(d.date))
    }

    /// The first time log recorded on the given date, if any.
    pub fn log_on(&self, date: NaiveDate) -> Option<&TimeLog> {
        self.time_logs.iter().find(|log| log.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn log(id: &str, d: &str) -> TimeLog {
        TimeLog {
            id: id.to_string(),
            date: date(d),
            check_in: Some("08:30".to_string()),
            check_out: Some("17:30".to_string()),
        }
    }

    #[test]
    fn test_deserialize_minimal_employee() {
        let json = r#"{
            "id": "12345678901",
            "full_name": "Mehmet Demir"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::new("12345678901", "Mehmet Demir"));
    }

    #[test]
    fn test_deserialize_full_employee() {
        let json = r#"{
            "id": "12345678901",
            "registry_no": "S-0042",
            "full_name": "Mehmet Demir",
            "position": "Kaynakçı",
            "birth_date": "1980-04-12",
            "hire_date": "2020-01-15",
            "base_salary": "30000",
            "hourly_rate": "133.33",
            "time_logs": [
                { "id": "t1", "date": "2025-01-06", "check_in": "08:30", "check_out": "17:30" }
            ],
            "bonuses": [
                { "id": "b1", "date": "2025-01-10", "amount": "500", "description": "Prim" }
            ]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.registry_no.as_deref(), Some("S-0042"));
        assert_eq!(employee.hire_date, Some(date("2020-01-15")));
        assert_eq!(employee.base_salary, Decimal::new(30000, 0));
        assert_eq!(employee.hourly_rate, Decimal::new(13333, 2));
        assert_eq!(employee.time_logs.len(), 1);
        assert_eq!(employee.bonuses.len(), 1);
        assert!(employee.deductions.is_empty());
        assert!(employee.leaves.is_empty());
    }

    #[test]
    fn test_logs_in_range_is_inclusive() {
        let mut employee = Employee::new("e1", "Test");
        employee.time_logs = vec![
            log("t0", "2025-01-31"),
            log("t1", "2025-02-01"),
            log("t2", "2025-02-28"),
            log("t3", "2025-03-01"),
        ];
        let range = DateRange::new(date("2025-02-01"), date("2025-02-28")).unwrap();

        let ids: Vec<&str> = employee.logs_in(&range).map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_log_on_returns_first_match() {
        let mut employee = Employee::new("e1", "Test");
        employee.time_logs = vec![log("first", "2025-01-06"), log("second", "2025-01-06")];

        assert_eq!(employee.log_on(date("2025-01-06")).unwrap().id, "first");
        assert!(employee.log_on(date("2025-01-07")).is_none());
    }
}
