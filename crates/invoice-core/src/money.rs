//! Currency conversion helpers

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Minor units per currency unit (cents per dollar)
pub const MINOR_UNITS_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// Convert a currency amount to minor units: `round(amount * 100)`.
///
/// Midpoints round away from zero, so `19.995` becomes `2000`.
/// Returns `None` when the result does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(MINOR_UNITS_PER_MAJOR)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
