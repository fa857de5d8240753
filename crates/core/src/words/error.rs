//! Conversion error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during amount-to-words conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    /// The whole-dollar magnitude does not fit in a 64-bit signed integer.
    #[error("Amount {0} has a whole part outside the supported 64-bit range")]
    OutOfRange(Decimal),
}
