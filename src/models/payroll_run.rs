//! Payroll run models.
//!
//! A payroll run computes one [`PayrollResult`] per employee for a single
//! [`PayPeriod`] and aggregates the figures an employer files and pays.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayPeriod, PayrollInput, PayrollResult};

/// One employee's line in a payroll run request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineInput {
    /// Identifier of the employee this line pays.
    pub employee_id: String,
    /// The employee's compensation inputs.
    #[serde(flatten)]
    pub input: PayrollInput,
}

/// A payroll run request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunInput {
    /// The period being paid.
    pub pay_period: PayPeriod,
    /// One line per employee.
    pub lines: Vec<PayrollLineInput>,
}

/// One employee's computed line in a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineResult {
    /// Identifier of the employee this line pays.
    pub employee_id: String,
    /// The employee's gross-to-net breakdown.
    #[serde(flatten)]
    pub result: PayrollResult,
}

/// Totals across every line of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollRunTotals {
    /// Number of employees paid.
    pub employee_count: u32,
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of wage income tax withheld.
    pub tax_withheld: Decimal,
    /// Sum of employee INSS contributions.
    pub inss_employee: Decimal,
    /// Sum of employer INSS contributions.
    pub inss_employer: Decimal,
    /// Sum of employee deductions (tax, employee INSS and other deductions).
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
    /// Sum of employer cost.
    pub total_employer_cost: Decimal,
    /// Number of employees whose base salary is below the minimum wage.
    pub below_minimum_wage_count: u32,
}

impl PayrollRunTotals {
    /// Adds one employee's result to the running totals.
    pub fn add(&mut self, result: &PayrollResult) {
        self.employee_count += 1;
        self.gross_pay += result.gross_pay;
        self.tax_withheld += result.tax_withheld;
        self.inss_employee += result.inss_employee;
        self.inss_employer += result.inss_employer;
        self.total_deductions += result.total_deductions;
        self.net_pay += result.net_pay;
        self.total_employer_cost += result.total_employer_cost;
        if result.below_minimum_wage {
            self.below_minimum_wage_count += 1;
        }
    }

    /// Total INSS owed to social security for the run (both shares).
    pub fn inss_total(&self) -> Decimal {
        self.inss_employee + self.inss_employer
    }
}

/// The result of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunResult {
    /// The period that was paid.
    pub pay_period: PayPeriod,
    /// When the tax and INSS returns for this period are due.
    pub filing_deadline: NaiveDate,
    /// Per-employee results, in request order.
    pub lines: Vec<PayrollLineResult>,
    /// Aggregated totals.
    pub totals: PayrollRunTotals,
}
