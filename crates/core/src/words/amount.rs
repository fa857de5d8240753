//! Decomposition of a decimal amount into sign, dollars, and cents.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts arrive as `rust_decimal::Decimal` and are rounded to cents
//! using banker's rounding (round half to even), the same strategy used
//! for every other monetary rounding in this workspace.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::WordsError;

/// A decimal amount split into the pieces the words renderer needs.
///
/// The input is rounded to 2 decimal places BEFORE splitting, so a carry
/// like `1.995 -> 2.00` lands in the whole part and `cents` stays in
/// `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountParts {
    /// True iff the rounded amount is strictly negative.
    pub negative: bool,
    /// Whole-dollar magnitude, bounded by `i64::MAX`.
    pub whole: u64,
    /// Cents in `0..=99`.
    pub cents: u8,
}

impl AmountParts {
    /// Splits `amount` into sign, whole dollars, and cents.
    ///
    /// # Errors
    ///
    /// Returns [`WordsError::OutOfRange`] when the whole-dollar magnitude
    /// does not fit in an `i64`.
    pub fn split(amount: Decimal) -> Result<Self, WordsError> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);

        // Strict comparison so a negative zero carries no sign.
        let negative = rounded < Decimal::ZERO;
        let magnitude = rounded.abs();

        let whole_dec = magnitude.trunc();
        let whole = whole_dec
            .to_i64()
            .and_then(|w| u64::try_from(w).ok())
            .ok_or(WordsError::OutOfRange(amount))?;

        // Exact after the 2dp rounding above: an integer in 0..=99.
        let cents = ((magnitude - whole_dec) * Decimal::ONE_HUNDRED)
            .to_u8()
            .ok_or(WordsError::OutOfRange(amount))?;

        Ok(Self {
            negative,
            whole,
            cents,
        })
    }

    /// Returns true if both dollars and cents are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.cents == 0
    }
}
