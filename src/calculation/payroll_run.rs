//! Batch payroll runs.
//!
//! Each employee's calculation is independent, so lines are computed in
//! parallel across the rayon thread pool and then aggregated in request
//! order.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::StatutoryRates;
use crate::error::EngineResult;
use crate::models::{PayrollLineResult, PayrollRunInput, PayrollRunResult, PayrollRunTotals};

use super::calculate_payroll;

/// Calculates payroll for every line of a run and aggregates the totals.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidConfig`] if the configured
/// filing deadline day does not exist in the month after the period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll_run;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::{PayPeriod, PayrollInput, PayrollLineInput, PayrollRunInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let run = PayrollRunInput {
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     },
///     lines: vec![
///         PayrollLineInput {
///             employee_id: "emp_001".to_string(),
///             input: PayrollInput::new(Decimal::from(600), true),
///         },
///         PayrollLineInput {
///             employee_id: "emp_002".to_string(),
///             input: PayrollInput::new(Decimal::from(400), true),
///         },
///     ],
/// };
///
/// let result = calculate_payroll_run(&run, &StatutoryRates::timor_leste()).unwrap();
/// assert_eq!(result.totals.employee_count, 2);
/// assert_eq!(result.totals.gross_pay, Decimal::from(1000));
/// assert_eq!(result.lines[1].employee_id, "emp_002");
/// ```
pub fn calculate_payroll_run(
    run: &PayrollRunInput,
    rates: &StatutoryRates,
) -> EngineResult<PayrollRunResult> {
    let filing_deadline = run.pay_period.filing_deadline(rates)?;

    debug!(lines = run.lines.len(), "Calculating payroll run");

    let lines: Vec<PayrollLineResult> = run
        .lines
        .par_iter()
        .map(|line| PayrollLineResult {
            employee_id: line.employee_id.clone(),
            result: calculate_payroll(&line.input, rates),
        })
        .collect();

    let mut totals = PayrollRunTotals::default();
    for line in &lines {
        totals.add(&line.result);
    }

    info!(
        period_start = %run.pay_period.start_date,
        period_end = %run.pay_period.end_date,
        employee_count = totals.employee_count,
        gross_pay = %totals.gross_pay,
        net_pay = %totals.net_pay,
        below_minimum_wage = totals.below_minimum_wage_count,
        "Payroll run calculated"
    );

    Ok(PayrollRunResult {
        pay_period: run.pay_period.clone(),
        filing_deadline,
        lines,
        totals,
    })
}
