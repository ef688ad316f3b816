//! Payroll input and result models.
//!
//! [`PayrollInput`] carries one employee's compensation for a pay period and
//! [`PayrollResult`] is the itemized gross-to-net breakdown the engine derives
//! from it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest monetary amount accepted by [`PayrollInput::validate`].
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Largest hour count accepted by [`PayrollInput::validate`]: every hour of
/// a 31-day month.
pub const MAX_HOURS: Decimal = dec!(744);

/// Rejects a value that is negative or greater than `max`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] naming `field`.
pub fn validate_range(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    let message = if value < Decimal::ZERO {
        "must not be negative".to_string()
    } else if value > max {
        format!("must not exceed {}", max)
    } else {
        return Ok(());
    };

    Err(EngineError::InvalidInput {
        field: field.to_string(),
        message,
    })
}

/// One employee's compensation inputs for a monthly pay period.
///
/// The engine accepts any values here, negative ones included, and produces
/// arithmetically consistent output for them. Callers that need to reject
/// nonsensical input should call [`PayrollInput::validate`] first. Amounts
/// above [`MAX_AMOUNT`] or hours above [`MAX_HOURS`] can overflow the
/// decimal arithmetic.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollInput;
///
/// let json = r#"{ "base_salary": "500.00", "is_resident": true }"#;
/// let input: PayrollInput = serde_json::from_str(json).unwrap();
///
/// assert!(input.overtime_hours_regular.is_zero());
/// assert!(!input.is_small_employer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Whether the employee is tax resident (183 days or more in the year).
    pub is_resident: bool,
    /// Overtime hours worked on ordinary working days.
    #[serde(default)]
    pub overtime_hours_regular: Decimal,
    /// Overtime hours worked on public holidays or rest days.
    #[serde(default)]
    pub overtime_hours_holiday: Decimal,
    /// Hours worked during the night period.
    #[serde(default)]
    pub night_shift_hours: Decimal,
    /// Allowances paid this period.
    #[serde(default)]
    pub allowances: Decimal,
    /// Bonuses paid this period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Employee-side deductions other than tax and INSS.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Whether the employer qualifies for the reduced INSS employer rate.
    #[serde(default)]
    pub is_small_employer: bool,
}

impl PayrollInput {
    /// Creates an input with the given salary and residency and every other
    /// field zeroed.
    pub fn new(base_salary: Decimal, is_resident: bool) -> Self {
        Self {
            base_salary,
            is_resident,
            overtime_hours_regular: Decimal::ZERO,
            overtime_hours_holiday: Decimal::ZERO,
            night_shift_hours: Decimal::ZERO,
            allowances: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            is_small_employer: false,
        }
    }

    /// Returns the monetary and hour fields paired with their names.
    pub fn numeric_fields(&self) -> [(&'static str, Decimal); 7] {
        [
            ("base_salary", self.base_salary),
            ("overtime_hours_regular", self.overtime_hours_regular),
            ("overtime_hours_holiday", self.overtime_hours_holiday),
            ("night_shift_hours", self.night_shift_hours),
            ("allowances", self.allowances),
            ("bonuses", self.bonuses),
            ("other_deductions", self.other_deductions),
        ]
    }

    /// Rejects negative amounts and hour counts, amounts above
    /// [`MAX_AMOUNT`] and hours above [`MAX_HOURS`].
    ///
    /// The calculation engine never calls this; it is for callers that
    /// enforce input hygiene before invoking the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the first field out of
    /// range.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in self.numeric_fields() {
            let max = if field.contains("hours") {
                MAX_HOURS
            } else {
                MAX_AMOUNT
            };
            validate_range(field, value, max)?;
        }
        Ok(())
    }
}

/// The full gross-to-net breakdown for one employee and period.
///
/// Every monetary field is rounded to cents at the point it was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Monthly base salary, echoed from the input.
    pub base_salary: Decimal,
    /// Pay for regular overtime.
    pub overtime_pay_regular: Decimal,
    /// Pay for holiday and rest-day overtime.
    pub overtime_pay_holiday: Decimal,
    /// Night work premium (the portion above ordinary pay).
    pub night_shift_premium: Decimal,
    /// Allowances, echoed from the input.
    pub allowances: Decimal,
    /// Bonuses, echoed from the input.
    pub bonuses: Decimal,
    /// Total earnings before deductions.
    pub gross_pay: Decimal,
    /// The amount wage income tax was levied on.
    pub taxable_income: Decimal,
    /// Wage income tax withheld.
    pub tax_withheld: Decimal,
    /// INSS contribution withheld from the employee.
    pub inss_employee: Decimal,
    /// INSS contribution borne by the employer.
    pub inss_employer: Decimal,
    /// Tax, employee INSS and other deductions combined.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_pay: Decimal,
    /// Gross pay plus employer INSS.
    pub total_employer_cost: Decimal,
    /// True when the base salary is below the monthly minimum wage.
    pub below_minimum_wage: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_minimal_input_defaults_to_zero() {
        let json = r#"{ "base_salary": "750.00", "is_resident": false }"#;
        let input: PayrollInput = serde_json::from_str(json).unwrap();

        assert_eq!(input, PayrollInput::new(dec("750.00"), false));
    }

    #[test]
    fn test_deserialize_full_input() {
        let json = r#"{
            "base_salary": "500.00",
            "is_resident": true,
            "overtime_hours_regular": "10",
            "overtime_hours_holiday": "4",
            "night_shift_hours": "8",
            "allowances": "50.00",
            "bonuses": "25.00",
            "other_deductions": "12.50",
            "is_small_employer": true
        }"#;
        let input: PayrollInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.overtime_hours_regular, dec("10"));
        assert_eq!(input.overtime_hours_holiday, dec("4"));
        assert_eq!(input.night_shift_hours, dec("8"));
        assert_eq!(input.bonuses, dec("25.00"));
        assert_eq!(input.other_deductions, dec("12.50"));
        assert!(input.is_small_employer);
    }

    #[test]
    fn test_missing_base_salary_is_rejected() {
        let json = r#"{ "is_resident": true }"#;
        let result: Result<PayrollInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_zero_and_positive_values() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.allowances = dec("0.00");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.night_shift_hours = dec("-2");

        match input.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "night_shift_hours");
                assert_eq!(message, "must not be negative");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_first_negative_field() {
        let mut input = PayrollInput::new(dec("-1"), true);
        input.bonuses = dec("-5");

        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_salary() {
        let input = PayrollInput::new(dec("7922816251426433759354395033"), true);

        match input.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "base_salary");
                assert_eq!(message, "must not exceed 1000000000000");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_bounds_hours_by_month_length() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.overtime_hours_regular = dec("744");
        assert!(input.validate().is_ok());

        input.overtime_hours_regular = dec("744.01");
        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "overtime_hours_regular");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_range_accepts_bounds() {
        assert!(validate_range("bonuses", Decimal::ZERO, MAX_AMOUNT).is_ok());
        assert!(validate_range("bonuses", MAX_AMOUNT, MAX_AMOUNT).is_ok());
        assert!(validate_range("bonuses", MAX_AMOUNT + dec("0.01"), MAX_AMOUNT).is_err());
    }

    #[test]
    fn test_result_serializes_decimals_as_strings() {
        let result = PayrollResult {
            base_salary: dec("500.00"),
            overtime_pay_regular: dec("39.34"),
            overtime_pay_holiday: Decimal::ZERO,
            night_shift_premium: Decimal::ZERO,
            allowances: dec("50.00"),
            bonuses: Decimal::ZERO,
            gross_pay: dec("589.34"),
            taxable_income: dec("89.34"),
            tax_withheld: dec("8.93"),
            inss_employee: dec("22.00"),
            inss_employer: dec("33.00"),
            total_deductions: dec("30.93"),
            net_pay: dec("558.41"),
            total_employer_cost: dec("622.34"),
            below_minimum_wage: false,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["gross_pay"].as_str().unwrap(), "589.34");
        assert_eq!(json["net_pay"].as_str().unwrap(), "558.41");
        assert_eq!(json["below_minimum_wage"].as_bool().unwrap(), false);
    }
}
