//! Bonus and deduction records.
//!
//! One-off payroll adjustments (prim and kesinti) recorded against an
//! employee and selected into a report period by date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A one-off bonus (prim) paid on top of salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    /// Unique identifier for the bonus.
    pub id: String,
    /// The date the bonus applies to.
    pub date: NaiveDate,
    /// The bonus amount in the local currency unit.
    pub amount: Decimal,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A one-off deduction (kesinti) withheld from salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// Unique identifier for the deduction.
    pub id: String,
    /// The date the deduction applies to.
    pub date: NaiveDate,
    /// The deducted amount in the local currency unit.
    pub amount: Decimal,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}
