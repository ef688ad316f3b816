//! Gross-to-net payroll calculation.
//!
//! This module turns a [`PayrollInput`] into a [`PayrollResult`]:
//!
//! 1. Hourly rate from the base salary
//! 2. Overtime (regular, holiday) and night premium, each rounded
//! 3. Gross pay from the rounded components
//! 4. INSS base: salary, allowances, bonuses and night premium (no overtime)
//! 5. Wage income tax on gross pay
//! 6. Employee and employer INSS
//! 7. Employee deductions (employer INSS excluded), net pay, employer cost

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{PayrollInput, PayrollResult};

use super::{
    calculate_hourly_rate, calculate_inss_base, calculate_inss_employee, calculate_inss_employer,
    calculate_night_shift_premium, calculate_overtime_pay, calculate_tax,
    calculate_taxable_income, round_to_cents,
};

/// Calculates the full pay breakdown for one employee and period.
///
/// The function is total: it never fails and does not validate its input.
/// Negative amounts or hours produce arithmetically consistent results.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = StatutoryRates::timor_leste();
/// let mut input = PayrollInput::new(Decimal::from(500), true);
/// input.overtime_hours_regular = Decimal::from(10);
/// input.allowances = Decimal::from(50);
///
/// let result = calculate_payroll(&input, &rates);
///
/// assert_eq!(result.overtime_pay_regular, Decimal::from_str("39.34").unwrap());
/// assert_eq!(result.gross_pay, Decimal::from_str("589.34").unwrap());
/// assert_eq!(result.tax_withheld, Decimal::from_str("8.93").unwrap());
/// assert_eq!(result.inss_employee, Decimal::from_str("22.00").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("558.41").unwrap());
/// ```
pub fn calculate_payroll(input: &PayrollInput, rates: &StatutoryRates) -> PayrollResult {
    let hourly_rate = calculate_hourly_rate(input.base_salary, rates);

    let overtime = calculate_overtime_pay(
        hourly_rate,
        input.overtime_hours_regular,
        input.overtime_hours_holiday,
        rates,
    );
    let night_shift_premium =
        calculate_night_shift_premium(hourly_rate, input.night_shift_hours, rates);

    // All components are already whole cents, so the sum is exact.
    let gross_pay = round_to_cents(
        input.base_salary
            + overtime.regular
            + overtime.holiday
            + night_shift_premium
            + input.allowances
            + input.bonuses,
    );

    let inss_base = calculate_inss_base(
        input.base_salary,
        input.allowances,
        input.bonuses,
        night_shift_premium,
    );

    let taxable_income = calculate_taxable_income(gross_pay, input.is_resident, rates);
    let tax_withheld = calculate_tax(gross_pay, input.is_resident, rates);
    let inss_employee = calculate_inss_employee(inss_base, rates);
    let inss_employer = calculate_inss_employer(inss_base, input.is_small_employer, rates);

    let total_deductions = round_to_cents(tax_withheld + inss_employee + input.other_deductions);
    let net_pay = round_to_cents(gross_pay - total_deductions);
    let total_employer_cost = round_to_cents(gross_pay + inss_employer);

    PayrollResult {
        base_salary: input.base_salary,
        overtime_pay_regular: overtime.regular,
        overtime_pay_holiday: overtime.holiday,
        night_shift_premium,
        allowances: input.allowances,
        bonuses: input.bonuses,
        gross_pay,
        taxable_income,
        tax_withheld,
        inss_employee,
        inss_employer,
        total_deductions,
        net_pay,
        total_employer_cost,
        below_minimum_wage: input.base_salary < rates.minimum_wage_monthly,
    }
}

/// Returns true if every component of `result` reconciles with its totals.
///
/// Checks gross pay against its earnings components and net pay against the
/// employee deductions.
pub fn reconciles(result: &PayrollResult, other_deductions: Decimal) -> bool {
    let gross = round_to_cents(
        result.base_salary
            + result.overtime_pay_regular
            + result.overtime_pay_holiday
            + result.night_shift_premium
            + result.allowances
            + result.bonuses,
    );
    let net = round_to_cents(
        result.gross_pay - result.tax_withheld - result.inss_employee - other_deductions,
    );
    gross == result.gross_pay && net == result.net_pay
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> StatutoryRates {
        StatutoryRates::timor_leste()
    }

    #[test]
    fn test_end_to_end_resident_with_overtime_and_allowance() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.overtime_hours_regular = dec("10");
        input.allowances = dec("50");

        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.base_salary, dec("500"));
        assert_eq!(result.overtime_pay_regular, dec("39.34"));
        assert_eq!(result.overtime_pay_holiday, Decimal::ZERO);
        assert_eq!(result.night_shift_premium, Decimal::ZERO);
        assert_eq!(result.gross_pay, dec("589.34"));
        assert_eq!(result.taxable_income, dec("89.34"));
        assert_eq!(result.tax_withheld, dec("8.93"));
        assert_eq!(result.inss_employee, dec("22.00"));
        assert_eq!(result.inss_employer, dec("33.00"));
        assert_eq!(result.total_deductions, dec("30.93"));
        assert_eq!(result.net_pay, dec("558.41"));
        assert_eq!(result.total_employer_cost, dec("622.34"));
        assert!(!result.below_minimum_wage);
    }

    #[test]
    fn test_overtime_excluded_from_inss_base() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.overtime_hours_regular = dec("10");

        let result = calculate_payroll(&input, &rates());

        assert!(result.overtime_pay_regular > Decimal::ZERO);
        assert_eq!(
            result.inss_employee,
            calculate_inss_employee(dec("500"), &rates())
        );
        assert_eq!(
            result.inss_employer,
            calculate_inss_employer(dec("500"), false, &rates())
        );
    }

    #[test]
    fn test_night_premium_included_in_inss_base() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.night_shift_hours = dec("20");

        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.night_shift_premium, dec("13.11"));
        assert_eq!(result.inss_employee, dec("20.52"));
        assert_eq!(result.inss_employer, dec("30.79"));
    }

    #[test]
    fn test_overtime_is_taxable() {
        let mut input = PayrollInput::new(dec("500"), true);
        let without_overtime = calculate_payroll(&input, &rates());

        input.overtime_hours_holiday = dec("8");
        let with_overtime = calculate_payroll(&input, &rates());

        assert_eq!(without_overtime.tax_withheld, Decimal::ZERO);
        assert!(with_overtime.tax_withheld > Decimal::ZERO);
    }

    #[test]
    fn test_non_resident_taxed_on_full_gross() {
        let input = PayrollInput::new(dec("600"), false);
        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.taxable_income, dec("600"));
        assert_eq!(result.tax_withheld, dec("60.00"));
        assert_eq!(result.inss_employee, dec("24.00"));
        assert_eq!(result.net_pay, dec("516.00"));
    }

    #[test]
    fn test_employer_inss_not_an_employee_deduction() {
        let input = PayrollInput::new(dec("1000"), true);
        let result = calculate_payroll(&input, &rates());

        // tax 50.00 + INSS employee 40.00
        assert_eq!(result.total_deductions, dec("90.00"));
        assert_eq!(result.net_pay, dec("910.00"));
        assert_eq!(result.total_employer_cost, dec("1060.00"));
    }

    #[test]
    fn test_small_employer_lowers_employer_cost_only() {
        let mut input = PayrollInput::new(dec("1000"), true);
        input.is_small_employer = true;

        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.inss_employer, dec("54.00"));
        assert_eq!(result.inss_employee, dec("40.00"));
        assert_eq!(result.total_employer_cost, dec("1054.00"));
    }

    #[test]
    fn test_other_deductions_reduce_net_pay() {
        let mut input = PayrollInput::new(dec("1000"), true);
        input.other_deductions = dec("25.50");

        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.total_deductions, dec("115.50"));
        assert_eq!(result.net_pay, dec("884.50"));
    }

    #[test]
    fn test_bonuses_and_allowances_in_gross_and_inss() {
        let mut input = PayrollInput::new(dec("400"), true);
        input.allowances = dec("60");
        input.bonuses = dec("140");

        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.gross_pay, dec("600"));
        assert_eq!(result.tax_withheld, dec("10.00"));
        assert_eq!(result.inss_employee, dec("24.00"));
    }

    #[test]
    fn test_below_minimum_wage_flag_uses_base_salary_only() {
        let input = PayrollInput::new(dec("100"), true);
        assert!(calculate_payroll(&input, &rates()).below_minimum_wage);

        // Allowances lift gross above the minimum but the flag stays on base
        let mut input = PayrollInput::new(dec("100"), true);
        input.allowances = dec("200");
        assert!(calculate_payroll(&input, &rates()).below_minimum_wage);

        let input = PayrollInput::new(dec("115"), true);
        assert!(!calculate_payroll(&input, &rates()).below_minimum_wage);
    }

    #[test]
    fn test_zero_salary() {
        let input = PayrollInput::new(Decimal::ZERO, true);
        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.gross_pay, Decimal::ZERO);
        assert_eq!(result.net_pay, Decimal::ZERO);
        assert!(result.below_minimum_wage);
    }

    #[test]
    fn test_negative_input_is_not_rejected() {
        let mut input = PayrollInput::new(dec("500"), true);
        input.bonuses = dec("-100");

        let result = calculate_payroll(&input, &rates());

        assert_eq!(result.gross_pay, dec("400"));
        assert_eq!(result.inss_employee, dec("16.00"));
        assert!(reconciles(&result, input.other_deductions));
    }

    #[test]
    fn test_result_reconciles() {
        let mut input = PayrollInput::new(dec("733.33"), false);
        input.overtime_hours_regular = dec("7.5");
        input.overtime_hours_holiday = dec("3");
        input.night_shift_hours = dec("11");
        input.allowances = dec("45.10");
        input.other_deductions = dec("9.99");

        let result = calculate_payroll(&input, &rates());
        assert!(reconciles(&result, input.other_deductions));
    }

    #[test]
    fn test_reconciles_detects_tampering() {
        let input = PayrollInput::new(dec("800"), true);
        let mut result = calculate_payroll(&input, &rates());
        result.net_pay += dec("0.01");

        assert!(!reconciles(&result, input.other_deductions));
    }
}
