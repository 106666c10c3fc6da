//! Leave record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of leave taken (izin çeşidi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave (yıllık izin), counted against the entitlement.
    Annual,
    /// Sick leave backed by a medical report (rapor).
    MedicalReport,
    /// Unpaid leave (ücretsiz izin).
    Unpaid,
    /// Any other excuse leave (mazeret izni, doğum, evlilik, ...).
    Other,
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved and counted.
    Approved,
    /// Rejected, never counted.
    Rejected,
}

/// A leave request or granted leave for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the leave record.
    pub id: String,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Number of leave days charged (entered by HR, not derived from the dates).
    pub days: Decimal,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Approval state.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Returns true if the leave has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}

/// Annual leave entitlement and usage for one employee as of a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// The employee the summary is for.
    pub employee_id: String,
    /// The date entitlement was evaluated on.
    pub as_of: NaiveDate,
    /// Years of service (days / 365.25), unrounded.
    pub years_worked: Decimal,
    /// Annual leave days the employee is entitled to.
    pub entitlement_days: u32,
    /// Which rule set the entitlement, in the words shown to HR.
    pub basis: String,
    /// Sum of days across all approved leave, any kind.
    pub total_approved_days: Decimal,
    /// Sum of days across approved annual leave.
    pub used_annual_days: Decimal,
    /// Entitlement minus used annual leave, never negative.
    pub remaining_annual_days: Decimal,
    /// Leave requests still awaiting approval.
    pub pending_requests: u32,
    /// Unpaid days charged for approved medical-report leave.
    pub medical_report_unpaid_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_leave_record() {
        let json = r#"{
            "id": "l1",
            "start_date": "2025-07-01",
            "end_date": "2025-07-10",
            "leave_type": "annual",
            "days": "8",
            "status": "approved"
        }"#;

        let leave: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(leave.leave_type, LeaveType::Annual);
        assert_eq!(leave.days, Decimal::new(8, 0));
        assert!(leave.is_approved());
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::MedicalReport).unwrap(),
            "\"medical_report\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
