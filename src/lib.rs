//! Payroll and termination payment engine for Turkish personnel management
//!
//! This crate turns an employee roster (time-clock logs, bonuses, deductions
//! and leave records) into period payroll reports, batch salary lists,
//! severance and notice pay calculations, annual leave summaries and daily
//! attendance summaries, following 4857 sayılı İş Kanunu.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
