//! Configuration module for the payroll engine.
//!
//! Statutory rules live in an immutable [`StatutoryRates`] value, either the
//! compiled-in Timor-Leste snapshot or one loaded from YAML:
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/timor_leste").unwrap();
//! let rates = loader.rates();
//! println!("Tax rate: {}", rates.income_tax.rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    IncomeTaxRates, InssRates, JurisdictionConfig, JurisdictionMetadata, NoticePeriodRules,
    OvertimeMultipliers, SeveranceBand, SeveranceSchedule, StatutoryRates,
};
