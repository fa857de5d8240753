//! Core conversion logic for Amountwords.
//!
//! This crate contains pure conversion logic with ZERO web dependencies.
//! The single entry point is [`words::amount_to_words`], which turns a
//! signed decimal dollar amount into its English-words representation.
//!
//! # Modules
//!
//! - `words` - Amount-to-words conversion

pub mod words;

pub use words::{WordsError, amount_to_words};
