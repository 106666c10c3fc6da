//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! working-time rules and statutory rates from YAML files.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calculation::{NoticeSchedule, TerminationParams, WorkRules, parse_clock_time};
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineFile, EngineMetadata, StatutoryRates};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tr/
/// ├── engine.yaml          # Metadata, working time, premiums, notice schedule
/// └── rates/
///     └── 2025-01-01.yaml  # Statutory rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use bordro_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/tr").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let rates = loader.get_statutory_rates(date).unwrap();
/// println!("Severance ceiling: {}", rates.severance_ceiling);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    work_start_time: NaiveTime,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tr")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The work start time is not a valid `HH:MM` time
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bordro_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tr")?;
    /// # Ok::<(), bordro_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load engine.yaml
        let engine_path = path.join("engine.yaml");
        let engine_file = Self::load_yaml::<EngineFile>(&engine_path)?;

        let work_start_time = parse_clock_time(&engine_file.working_time.work_start_time)
            .ok_or_else(|| EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: format!(
                    "invalid work_start_time '{}', expected HH:MM",
                    engine_file.working_time.work_start_time
                ),
            })?;

        // Load all rate files from the rates directory
        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        let config = EngineConfig::new(engine_file, rates);

        debug!(
            path = %path.display(),
            rate_sets = config.rates().len(),
            "Configuration loaded"
        );

        Ok(Self {
            config,
            work_start_time,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<StatutoryRates>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<StatutoryRates>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Gets the statutory rates in effect on a given date.
    ///
    /// The method finds the most recent rate set that is effective on or
    /// before the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bordro_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/tr")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    /// let rates = loader.get_statutory_rates(date)?;
    /// println!("Stamp duty: {}", rates.stamp_tax_rate);
    /// # Ok::<(), bordro_engine::error::EngineError>(())
    /// ```
    pub fn get_statutory_rates(&self, date: NaiveDate) -> EngineResult<&StatutoryRates> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .ok_or(EngineError::RateNotFound { date })
    }

    /// Working-time rules for period reports.
    pub fn work_rules(&self) -> WorkRules {
        self.config.work_rules()
    }

    /// The work start time lateness is measured against.
    pub fn work_start_time(&self) -> NaiveTime {
        self.work_start_time
    }

    /// The notice period schedule.
    pub fn notice_schedule(&self) -> &NoticeSchedule {
        self.config.notice()
    }

    /// Monthly hours a salary is divided by to derive an hourly rate.
    pub fn hourly_rate_divisor(&self) -> Decimal {
        self.config.working_time().hourly_rate_divisor
    }

    /// Builds termination parameters from the rates effective on `termination_date`.
    pub fn termination_params(
        &self,
        termination_date: NaiveDate,
        gross_salary: Decimal,
        additional_benefits: Decimal,
    ) -> EngineResult<TerminationParams> {
        let rates = self.get_statutory_rates(termination_date)?;
        Ok(TerminationParams {
            gross_salary,
            additional_benefits,
            severance_ceiling: rates.severance_ceiling,
            stamp_tax_rate: rates.stamp_tax_rate,
            notice_income_tax_rate: rates.notice_income_tax_rate,
            notice_schedule: self.notice_schedule().clone(),
        })
    }
}
