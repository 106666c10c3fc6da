//! Core data models for the payroll engine.
//!
//! This module contains the roster records the engine reads (employees,
//! time logs, bonuses, deductions, leaves) and the reports it produces.

mod attendance;
mod employee;
mod leave;
mod ledger;
mod period;
mod report;
mod termination;
mod time_log;

pub use attendance::{AttendanceSummary, LateArrival};
pub use employee::Employee;
pub use leave::{LeaveRecord, LeaveStatus, LeaveSummary, LeaveType};
pub use ledger::{Bonus, Deduction};
pub use period::DateRange;
pub use report::{AuditStep, BatchReport, PeriodReport};
pub use termination::{Tenure, TerminationCalculation};
pub use time_log::TimeLog;
