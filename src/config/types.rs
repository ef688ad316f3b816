//! Configuration types for statutory payroll rules.
//!
//! These types are deserialized from YAML files and hold every statutory
//! constant the calculation engine reads. A [`StatutoryRates`] value is an
//! immutable snapshot; a different year's rules are a different value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Jurisdiction metadata from jurisdiction.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// The jurisdiction code (e.g., "TL").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The ISO 4217 currency all amounts are expressed in.
    pub currency: String,
    /// The version of the rule snapshot.
    pub version: String,
    /// URL to the official legislation.
    pub source_url: String,
}

impl JurisdictionMetadata {
    /// Metadata describing the compiled-in Timor-Leste snapshot.
    pub fn timor_leste() -> Self {
        Self {
            code: "TL".to_string(),
            name: "Timor-Leste".to_string(),
            currency: "USD".to_string(),
            version: "2024-01-01".to_string(),
            source_url: "https://www.mj.gov.tl/jornal/".to_string(),
        }
    }
}

/// Wage income tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxRates {
    /// Flat withholding rate applied to taxable income.
    pub rate: Decimal,
    /// Monthly amount exempt from tax for residents only.
    pub resident_exemption_monthly: Decimal,
}

/// Social security (INSS) contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssRates {
    /// Share withheld from the employee.
    pub employee_rate: Decimal,
    /// Standard share borne by the employer.
    pub employer_rate: Decimal,
    /// Employer share for qualifying small employers.
    pub employer_rate_reduced: Decimal,
}

/// Overtime pay multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for overtime on ordinary working days.
    pub regular_multiplier: Decimal,
    /// Multiplier for overtime on public holidays and rest days.
    pub holiday_multiplier: Decimal,
}

/// A single tenure band in the severance schedule.
///
/// Bands are half-open: a band matches when
/// `min_months <= months < max_months`. A missing `max_months` leaves the
/// band open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceBand {
    /// Inclusive lower bound in completed months of service.
    pub min_months: u32,
    /// Exclusive upper bound, or `None` for the final band.
    #[serde(default)]
    pub max_months: Option<u32>,
    /// Days of pay owed for tenure within this band.
    pub days: u32,
}

impl SeveranceBand {
    /// Returns true if the given tenure falls within this band.
    pub fn contains(&self, months_of_service: u32) -> bool {
        months_of_service >= self.min_months
            && self.max_months.is_none_or(|max| months_of_service < max)
    }
}

/// Severance schedule: minimum qualifying tenure and the day-count bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceSchedule {
    /// Tenure below which no severance is owed.
    pub minimum_months: u32,
    /// Tenure bands ordered by `min_months`.
    pub bands: Vec<SeveranceBand>,
}

impl SeveranceSchedule {
    /// Returns the days owed for the given tenure, or zero if no band matches.
    pub fn days_for(&self, months_of_service: u32) -> u32 {
        self.bands
            .iter()
            .find(|band| band.contains(months_of_service))
            .map(|band| band.days)
            .unwrap_or(0)
    }
}

/// Notice period rules keyed on a single tenure threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticePeriodRules {
    /// Tenure at or above which the long notice period applies.
    pub threshold_months: u32,
    /// Notice days owed below the threshold.
    pub short_days: u32,
    /// Notice days owed at or above the threshold.
    pub long_days: u32,
}

impl NoticePeriodRules {
    /// Returns the notice days owed for the given tenure.
    pub fn days_for(&self, months_of_service: u32) -> u32 {
        if months_of_service < self.threshold_months {
            self.short_days
        } else {
            self.long_days
        }
    }
}

/// The complete set of statutory constants used by the calculation engine.
///
/// Passed by reference into every calculation so that rule changes never
/// touch calculation logic.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
/// assert_eq!(rates.minimum_wage_monthly, Decimal::from(115));
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Monthly minimum wage.
    pub minimum_wage_monthly: Decimal,
    /// Standard working hours per week.
    pub standard_weekly_hours: Decimal,
    /// Wage income tax parameters.
    pub income_tax: IncomeTaxRates,
    /// INSS contribution rates.
    pub inss: InssRates,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
    /// Night work multiplier; only the portion above 1 is paid as premium.
    pub night_shift_multiplier: Decimal,
    /// Severance schedule.
    pub severance: SeveranceSchedule,
    /// Notice period rules.
    pub notice_period: NoticePeriodRules,
    /// Day of the following month by which monthly returns are due.
    pub filing_deadline_day: u32,
    /// Divisor turning a monthly salary into a daily rate for termination pay.
    pub days_per_month: Decimal,
}

impl StatutoryRates {
    /// The current Timor-Leste snapshot.
    pub fn timor_leste() -> Self {
        Self {
            minimum_wage_monthly: dec!(115.00),
            standard_weekly_hours: dec!(44),
            income_tax: IncomeTaxRates {
                rate: dec!(0.10),
                resident_exemption_monthly: dec!(500.00),
            },
            inss: InssRates {
                employee_rate: dec!(0.04),
                employer_rate: dec!(0.06),
                employer_rate_reduced: dec!(0.054),
            },
            overtime: OvertimeMultipliers {
                regular_multiplier: dec!(1.5),
                holiday_multiplier: dec!(2.0),
            },
            night_shift_multiplier: dec!(1.25),
            severance: SeveranceSchedule {
                minimum_months: 3,
                bands: vec![
                    SeveranceBand {
                        min_months: 3,
                        max_months: Some(12),
                        days: 30,
                    },
                    SeveranceBand {
                        min_months: 12,
                        max_months: Some(36),
                        days: 60,
                    },
                    SeveranceBand {
                        min_months: 36,
                        max_months: Some(60),
                        days: 90,
                    },
                    SeveranceBand {
                        min_months: 60,
                        max_months: Some(120),
                        days: 120,
                    },
                    SeveranceBand {
                        min_months: 120,
                        max_months: None,
                        days: 150,
                    },
                ],
            },
            notice_period: NoticePeriodRules {
                threshold_months: 24,
                short_days: 15,
                long_days: 30,
            },
            filing_deadline_day: 15,
            days_per_month: dec!(30),
        }
    }

    /// Returns the employer INSS rate that applies to the given employer size.
    pub fn inss_employer_rate(&self, is_small_employer: bool) -> Decimal {
        if is_small_employer {
            self.inss.employer_rate_reduced
        } else {
            self.inss.employer_rate
        }
    }

    /// Checks the snapshot for values that cannot describe a real statute.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let fractions = [
            ("income_tax.rate", self.income_tax.rate),
            ("inss.employee_rate", self.inss.employee_rate),
            ("inss.employer_rate", self.inss.employer_rate),
            ("inss.employer_rate_reduced", self.inss.employer_rate_reduced),
        ];
        for (field, value) in fractions {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(invalid(field, "must be between 0 and 1"));
            }
        }

        let multipliers = [
            ("overtime.regular_multiplier", self.overtime.regular_multiplier),
            ("overtime.holiday_multiplier", self.overtime.holiday_multiplier),
            ("night_shift_multiplier", self.night_shift_multiplier),
        ];
        for (field, value) in multipliers {
            if value < Decimal::ONE {
                return Err(invalid(field, "must be at least 1"));
            }
        }

        if self.minimum_wage_monthly < Decimal::ZERO {
            return Err(invalid("minimum_wage_monthly", "must not be negative"));
        }
        if self.income_tax.resident_exemption_monthly < Decimal::ZERO {
            return Err(invalid(
                "income_tax.resident_exemption_monthly",
                "must not be negative",
            ));
        }
        if self.standard_weekly_hours <= Decimal::ZERO {
            return Err(invalid("standard_weekly_hours", "must be positive"));
        }
        if self.days_per_month <= Decimal::ZERO {
            return Err(invalid("days_per_month", "must be positive"));
        }
        if !(1..=28).contains(&self.filing_deadline_day) {
            return Err(invalid("filing_deadline_day", "must be between 1 and 28"));
        }
        if self.notice_period.short_days > self.notice_period.long_days {
            return Err(invalid(
                "notice_period.short_days",
                "must not exceed notice_period.long_days",
            ));
        }

        self.validate_severance_bands()
    }

    fn validate_severance_bands(&self) -> EngineResult<()> {
        let bands = &self.severance.bands;
        if bands.is_empty() {
            return Err(invalid("severance.bands", "at least one band is required"));
        }

        for (index, band) in bands.iter().enumerate() {
            if band.max_months.is_some_and(|max| max <= band.min_months) {
                return Err(invalid(
                    "severance.bands",
                    &format!("band {} has max_months <= min_months", index),
                ));
            }
            if let Some(next) = bands.get(index + 1) {
                match band.max_months {
                    None => {
                        return Err(invalid(
                            "severance.bands",
                            &format!("open-ended band {} must be last", index),
                        ));
                    }
                    Some(max) if next.min_months < max => {
                        return Err(invalid(
                            "severance.bands",
                            &format!("band {} overlaps band {}", index, index + 1),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self::timor_leste()
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// The complete jurisdiction configuration: metadata plus statutory rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Statutory rates.
    rates: StatutoryRates,
}

impl JurisdictionConfig {
    /// Creates a new JurisdictionConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, rates: StatutoryRates) -> Self {
        Self { metadata, rates }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_timor_leste_snapshot_is_valid() {
        assert!(StatutoryRates::timor_leste().validate().is_ok());
    }

    #[test]
    fn test_default_is_timor_leste() {
        assert_eq!(StatutoryRates::default(), StatutoryRates::timor_leste());
    }

    #[test]
    fn test_employer_rate_selection() {
        let rates = StatutoryRates::timor_leste();
        assert_eq!(rates.inss_employer_rate(false), dec("0.06"));
        assert_eq!(rates.inss_employer_rate(true), dec("0.054"));
    }

    #[test]
    fn test_severance_band_is_half_open() {
        let band = SeveranceBand {
            min_months: 3,
            max_months: Some(12),
            days: 30,
        };
        assert!(!band.contains(2));
        assert!(band.contains(3));
        assert!(band.contains(11));
        assert!(!band.contains(12));
    }

    #[test]
    fn test_open_ended_band_matches_long_tenure() {
        let band = SeveranceBand {
            min_months: 120,
            max_months: None,
            days: 150,
        };
        assert!(band.contains(120));
        assert!(band.contains(600));
    }

    #[test]
    fn test_severance_days_lookup() {
        let schedule = StatutoryRates::timor_leste().severance;
        assert_eq!(schedule.days_for(0), 0);
        assert_eq!(schedule.days_for(3), 30);
        assert_eq!(schedule.days_for(12), 60);
        assert_eq!(schedule.days_for(35), 60);
        assert_eq!(schedule.days_for(36), 90);
        assert_eq!(schedule.days_for(60), 120);
        assert_eq!(schedule.days_for(240), 150);
    }

    #[test]
    fn test_severance_days_zero_in_gap() {
        let schedule = SeveranceSchedule {
            minimum_months: 3,
            bands: vec![SeveranceBand {
                min_months: 3,
                max_months: Some(12),
                days: 30,
            }],
        };
        assert_eq!(schedule.days_for(12), 0);
    }

    #[test]
    fn test_notice_period_threshold() {
        let rules = StatutoryRates::timor_leste().notice_period;
        assert_eq!(rules.days_for(23), 15);
        assert_eq!(rules.days_for(24), 30);
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let mut rates = StatutoryRates::timor_leste();
        rates.inss.employee_rate = dec("1.5");

        match rates.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "inss.employee_rate");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_multiplier_below_one() {
        let mut rates = StatutoryRates::timor_leste();
        rates.night_shift_multiplier = dec("0.75");

        match rates.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "night_shift_multiplier");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_filing_day_out_of_range() {
        let mut rates = StatutoryRates::timor_leste();
        rates.filing_deadline_day = 31;
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overlapping_bands() {
        let mut rates = StatutoryRates::timor_leste();
        rates.severance.bands[1].min_months = 6;

        match rates.validate() {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "severance.bands");
                assert!(message.contains("overlaps"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_open_band_before_last() {
        let mut rates = StatutoryRates::timor_leste();
        rates.severance.bands[0].max_months = None;

        match rates.validate() {
            Err(EngineError::InvalidConfig { message, .. }) => {
                assert!(message.contains("must be last"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_bands() {
        let mut rates = StatutoryRates::timor_leste();
        rates.severance.bands.clear();
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_notice_longer_than_long() {
        let mut rates = StatutoryRates::timor_leste();
        rates.notice_period.short_days = 45;
        assert!(rates.validate().is_err());
    }
}
