//! Cent rounding shared by every monetary calculation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole cents, with midpoints rounded away
/// from zero.
///
/// Every monetary sub-computation is rounded with this function at the point
/// it is produced, before it is combined with anything else.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("8.934").unwrap()), Decimal::from_str("8.93").unwrap());
/// assert_eq!(round_to_cents(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
