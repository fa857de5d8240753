//! Amount-to-words conversion.

pub mod amount;
pub mod convert;
pub mod error;

#[cfg(test)]
mod props;

pub use amount::AmountParts;
pub use convert::amount_to_words;
pub use error::WordsError;
