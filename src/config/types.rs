//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{NoticeSchedule, WorkRules};

/// Metadata identifying the rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Short code for the rule set (e.g., "TR").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or revision date of the rule set.
    pub version: String,
    /// Primary statute the rules follow.
    pub legal_basis: String,
}

/// Working-time section of engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingTimeConfig {
    /// Work start time (`HH:MM`) lateness is measured against.
    pub work_start_time: String,
    /// Required hours per logged work day.
    pub daily_required_hours: Decimal,
    /// Days in the notional salary month.
    pub proration_days: Decimal,
    /// Monthly hours a salary is divided by to derive an hourly rate.
    pub hourly_rate_divisor: Decimal,
}

/// Premium multipliers.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiumConfig {
    /// Reference to the statute article for overtime.
    pub clause: String,
    /// Weekday overtime multiplier.
    pub weekday_overtime: Decimal,
    /// Sunday multiplier.
    pub sunday: Decimal,
}

/// engine.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Rule set metadata.
    pub engine: EngineMetadata,
    /// Working-time rules.
    pub working_time: WorkingTimeConfig,
    /// Premium multipliers.
    pub premiums: PremiumConfig,
    /// Notice period schedule.
    pub notice: NoticeSchedule,
}

/// Statutory rates effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// The date these rates take effect.
    pub effective_date: NaiveDate,
    /// Monthly severance wage ceiling (kıdem tazminatı tavanı).
    pub severance_ceiling: Decimal,
    /// Stamp duty rate.
    pub stamp_tax_rate: Decimal,
    /// Income tax rate applied to notice pay.
    pub notice_income_tax_rate: Decimal,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    working_time: WorkingTimeConfig,
    premiums: PremiumConfig,
    notice: NoticeSchedule,
    /// Statutory rates by effective date (sorted oldest first).
    rates: Vec<StatutoryRates>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(file: EngineFile, rates: Vec<StatutoryRates>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata: file.engine,
            working_time: file.working_time,
            premiums: file.premiums,
            notice: file.notice.normalized(),
            rates: sorted_rates,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the working-time section.
    pub fn working_time(&self) -> &WorkingTimeConfig {
        &self.working_time
    }

    /// Returns the premium multipliers.
    pub fn premiums(&self) -> &PremiumConfig {
        &self.premiums
    }

    /// Returns the notice schedule.
    pub fn notice(&self) -> &NoticeSchedule {
        &self.notice
    }

    /// Returns all statutory rate sets.
    pub fn rates(&self) -> &[StatutoryRates] {
        &self.rates
    }

    /// Working-time rules for period reports.
    pub fn work_rules(&self) -> WorkRules {
        WorkRules {
            daily_required_hours: self.working_time.daily_required_hours,
            weekday_overtime_multiplier: self.premiums.weekday_overtime,
            sunday_multiplier: self.premiums.sunday,
            proration_days: self.working_time.proration_days,
        }
    }
}
