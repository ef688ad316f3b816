//! Payroll engine for Timor-Leste
//!
//! This crate calculates statutory payroll under Timor-Leste law: wage income
//! tax, INSS social security contributions, overtime and night work premiums,
//! gross-to-net pay, severance, notice periods, final pay on termination and
//! the minimum wage check. All money is [`rust_decimal::Decimal`] rounded to
//! cents, half away from zero.
//!
//! The calculations are pure functions over [`config::StatutoryRates`]; the
//! [`api`] module exposes them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
