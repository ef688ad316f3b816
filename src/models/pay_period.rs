//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that frames a payroll run and
//! determines when its statutory returns fall due.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};

/// Represents a pay period with its date range.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
///
/// assert_eq!(
///     period.filing_deadline(&StatutoryRates::timor_leste()).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns the date by which monthly tax and INSS returns for this
    /// period are due: the configured day of the month after `end_date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the configured day does not
    /// exist in that month.
    pub fn filing_deadline(&self, rates: &StatutoryRates) -> EngineResult<NaiveDate> {
        let (year, month) = match self.end_date.month() {
            12 => (self.end_date.year() + 1, 1),
            m => (self.end_date.year(), m + 1),
        };

        NaiveDate::from_ymd_opt(year, month, rates.filing_deadline_day).ok_or_else(|| {
            EngineError::InvalidConfig {
                field: "filing_deadline_day".to_string(),
                message: format!(
                    "day {} does not exist in {}-{:02}",
                    rates.filing_deadline_day, year, month
                ),
            }
        })
    }
}
