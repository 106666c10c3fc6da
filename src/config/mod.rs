//! Configuration loading and management for the payroll engine.
//!
//! This module loads working-time rules, premiums, the notice schedule and
//! dated statutory rates (severance ceiling, tax rates) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use bordro_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tr").unwrap();
//! println!("Loaded rule set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineFile, EngineMetadata, PremiumConfig, StatutoryRates, WorkingTimeConfig,
};
