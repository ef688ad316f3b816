//! Audit trail for payroll calculations.
//!
//! [`explain_payroll`] produces the same [`PayrollResult`] as
//! [`calculate_payroll`] together with an [`AuditTrace`] recording each rule
//! applied, its inputs and outputs, and a plain-English explanation.

use rust_decimal::Decimal;
use serde_json::json;

use crate::config::StatutoryRates;
use crate::models::{AuditStep, AuditTrace, AuditWarning, PayrollInput, PayrollResult};

use super::{
    calculate_hourly_rate, calculate_inss_base, calculate_payroll, night_shift_premium_rate,
};

/// Statute governing wage income tax.
pub const INCOME_TAX_LEGAL_REF: &str = "Taxes and Duties Act 2008 (Wage Income Tax)";

/// Statute governing social security contributions.
pub const INSS_LEGAL_REF: &str = "Social Security Law 12/2016 (Contributory Regime)";

/// Statute governing working time, overtime and night work.
pub const LABOUR_CODE_LEGAL_REF: &str = "Labour Code, Law 4/2012";

/// Warning code raised when base salary is below the minimum wage.
pub const BELOW_MINIMUM_WAGE_WARNING: &str = "BELOW_MINIMUM_WAGE";

/// Warning code raised for each negative amount or hour count.
pub const NEGATIVE_INPUT_WARNING: &str = "NEGATIVE_INPUT";

/// A payroll result together with the trace explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollAudit {
    /// The gross-to-net breakdown.
    pub result: PayrollResult,
    /// The steps and warnings behind it.
    pub audit_trace: AuditTrace,
}

struct StepRecorder {
    steps: Vec<AuditStep>,
}

impl StepRecorder {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        legal_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            legal_ref: legal_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }
}

fn s(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Calculates payroll and records an audit trace of every step.
///
/// The result is identical to [`calculate_payroll`]. Warnings are advisory
/// and never change the result.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::explain_payroll;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
/// let audit = explain_payroll(&PayrollInput::new(Decimal::from(100), true), &rates);
///
/// assert!(audit.result.below_minimum_wage);
/// assert!(audit.audit_trace.has_warning("BELOW_MINIMUM_WAGE"));
/// assert_eq!(audit.audit_trace.steps[0].rule_id, "hourly_rate");
/// ```
pub fn explain_payroll(input: &PayrollInput, rates: &StatutoryRates) -> PayrollAudit {
    let result = calculate_payroll(input, rates);
    let hourly_rate = calculate_hourly_rate(input.base_salary, rates);
    let inss_base = calculate_inss_base(
        input.base_salary,
        input.allowances,
        input.bonuses,
        result.night_shift_premium,
    );

    let mut recorder = StepRecorder { steps: Vec::new() };

    recorder.record(
        "hourly_rate",
        "Hourly Rate",
        LABOUR_CODE_LEGAL_REF,
        json!({
            "base_salary": s(input.base_salary),
            "standard_weekly_hours": s(rates.standard_weekly_hours)
        }),
        json!({ "hourly_rate": s(hourly_rate.round_dp(4)) }),
        format!(
            "${} / ({} hours × 52/12 weeks) = ${} per hour",
            s(input.base_salary),
            s(rates.standard_weekly_hours),
            s(hourly_rate.round_dp(4))
        ),
    );

    recorder.record(
        "overtime_pay",
        "Overtime Pay",
        LABOUR_CODE_LEGAL_REF,
        json!({
            "regular_hours": s(input.overtime_hours_regular),
            "holiday_hours": s(input.overtime_hours_holiday),
            "regular_multiplier": s(rates.overtime.regular_multiplier),
            "holiday_multiplier": s(rates.overtime.holiday_multiplier)
        }),
        json!({
            "overtime_pay_regular": s(result.overtime_pay_regular),
            "overtime_pay_holiday": s(result.overtime_pay_holiday)
        }),
        format!(
            "{} regular hours at {}x = ${}; {} holiday hours at {}x = ${}",
            s(input.overtime_hours_regular),
            s(rates.overtime.regular_multiplier),
            s(result.overtime_pay_regular),
            s(input.overtime_hours_holiday),
            s(rates.overtime.holiday_multiplier),
            s(result.overtime_pay_holiday)
        ),
    );

    recorder.record(
        "night_shift_premium",
        "Night Shift Premium",
        LABOUR_CODE_LEGAL_REF,
        json!({
            "night_shift_hours": s(input.night_shift_hours),
            "premium_rate": s(night_shift_premium_rate(rates))
        }),
        json!({ "night_shift_premium": s(result.night_shift_premium) }),
        format!(
            "{} night hours at {}% premium = ${}",
            s(input.night_shift_hours),
            s(night_shift_premium_rate(rates) * Decimal::ONE_HUNDRED),
            s(result.night_shift_premium)
        ),
    );

    recorder.record(
        "gross_pay",
        "Gross Pay",
        LABOUR_CODE_LEGAL_REF,
        json!({
            "base_salary": s(result.base_salary),
            "overtime_pay_regular": s(result.overtime_pay_regular),
            "overtime_pay_holiday": s(result.overtime_pay_holiday),
            "night_shift_premium": s(result.night_shift_premium),
            "allowances": s(result.allowances),
            "bonuses": s(result.bonuses)
        }),
        json!({ "gross_pay": s(result.gross_pay) }),
        format!("Earnings components sum to ${}", s(result.gross_pay)),
    );

    let residency = if input.is_resident { "resident" } else { "non-resident" };
    let tax_reasoning = if input.is_resident {
        format!(
            "Resident: (${} - ${} exemption, floored at 0) × {} = ${}",
            s(result.gross_pay),
            s(rates.income_tax.resident_exemption_monthly),
            s(rates.income_tax.rate),
            s(result.tax_withheld)
        )
    } else {
        format!(
            "Non-resident, no exemption: ${} × {} = ${}",
            s(result.gross_pay),
            s(rates.income_tax.rate),
            s(result.tax_withheld)
        )
    };
    recorder.record(
        "income_tax",
        "Wage Income Tax",
        INCOME_TAX_LEGAL_REF,
        json!({
            "gross_pay": s(result.gross_pay),
            "residency": residency,
            "rate": s(rates.income_tax.rate)
        }),
        json!({
            "taxable_income": s(result.taxable_income),
            "tax_withheld": s(result.tax_withheld)
        }),
        tax_reasoning,
    );

    let employer_rate = rates.inss_employer_rate(input.is_small_employer);
    recorder.record(
        "inss_contributions",
        "INSS Contributions",
        INSS_LEGAL_REF,
        json!({
            "contributory_base": s(inss_base),
            "employee_rate": s(rates.inss.employee_rate),
            "employer_rate": s(employer_rate),
            "small_employer": input.is_small_employer
        }),
        json!({
            "inss_employee": s(result.inss_employee),
            "inss_employer": s(result.inss_employer)
        }),
        format!(
            "Base ${} (overtime excluded): employee {} = ${}, employer {} = ${}",
            s(inss_base),
            s(rates.inss.employee_rate),
            s(result.inss_employee),
            s(employer_rate),
            s(result.inss_employer)
        ),
    );

    recorder.record(
        "net_pay",
        "Net Pay",
        LABOUR_CODE_LEGAL_REF,
        json!({
            "gross_pay": s(result.gross_pay),
            "tax_withheld": s(result.tax_withheld),
            "inss_employee": s(result.inss_employee),
            "other_deductions": s(input.other_deductions)
        }),
        json!({
            "total_deductions": s(result.total_deductions),
            "net_pay": s(result.net_pay)
        }),
        format!(
            "${} - ${} deductions = ${}",
            s(result.gross_pay),
            s(result.total_deductions),
            s(result.net_pay)
        ),
    );

    recorder.record(
        "employer_cost",
        "Total Employer Cost",
        INSS_LEGAL_REF,
        json!({
            "gross_pay": s(result.gross_pay),
            "inss_employer": s(result.inss_employer)
        }),
        json!({ "total_employer_cost": s(result.total_employer_cost) }),
        format!(
            "${} gross + ${} employer INSS = ${}",
            s(result.gross_pay),
            s(result.inss_employer),
            s(result.total_employer_cost)
        ),
    );

    let audit_trace = AuditTrace {
        steps: recorder.steps,
        warnings: collect_warnings(input, &result, rates),
        duration_us: 0,
    };

    PayrollAudit {
        result,
        audit_trace,
    }
}

fn collect_warnings(
    input: &PayrollInput,
    result: &PayrollResult,
    rates: &StatutoryRates,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if result.below_minimum_wage {
        warnings.push(AuditWarning {
            code: BELOW_MINIMUM_WAGE_WARNING.to_string(),
            message: format!(
                "Base salary ${} is below the minimum wage of ${}",
                s(input.base_salary),
                s(rates.minimum_wage_monthly)
            ),
            severity: "high".to_string(),
        });
    }

    for (field, value) in input.numeric_fields() {
        if value < Decimal::ZERO {
            warnings.push(AuditWarning {
                code: NEGATIVE_INPUT_WARNING.to_string(),
                message: format!("{} is negative ({})", field, s(value)),
                severity: "medium".to_string(),
            });
        }
    }

    warnings
}
