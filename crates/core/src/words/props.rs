//! Property-based tests for amount-to-words conversion.
//!
//! Covered properties:
//! - Whitespace hygiene (no doubled, leading, or trailing spaces)
//! - MINUS prefix symmetry between `n` and `-n`
//! - Determinism
//! - Clause structure (dollar clause always present, cents clause iff cents)

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::convert::amount_to_words;

/// Strategy for amounts in cents, covering roughly +/- ten billion dollars.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..=1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly positive amounts in cents.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for nonnegative whole-dollar amounts.
fn whole_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000_000_000i64).prop_map(Decimal::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// *For any* amount, the output SHALL contain no doubled spaces and
    /// no leading or trailing whitespace.
    #[test]
    fn prop_whitespace_hygiene(amount in any_amount()) {
        let words = amount_to_words(amount).unwrap();
        prop_assert!(!words.contains("  "), "doubled space in {words:?}");
        prop_assert_eq!(words.trim(), &words, "untrimmed output");
    }

    /// *For any* nonzero positive amount, `-n` SHALL render as `n` with a
    /// `MINUS ` prefix and no other difference.
    #[test]
    fn prop_minus_prefix_symmetry(amount in positive_amount()) {
        let positive = amount_to_words(amount).unwrap();
        let negative = amount_to_words(-amount).unwrap();
        prop_assert_eq!(negative, format!("MINUS {positive}"));
    }

    /// *For any* amount, conversion SHALL be deterministic.
    #[test]
    fn prop_deterministic(amount in any_amount()) {
        let first = amount_to_words(amount).unwrap();
        let second = amount_to_words(amount).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* amount, the output SHALL contain a dollar clause.
    #[test]
    fn prop_dollar_clause_always_present(amount in any_amount()) {
        let words = amount_to_words(amount).unwrap();
        prop_assert!(words.contains("DOLLAR"), "no dollar clause in {words:?}");
    }

    /// *For any* whole-dollar amount, the output SHALL have no cents
    /// clause and SHALL end with the dollar unit word.
    #[test]
    fn prop_whole_amounts_have_no_cents_clause(amount in whole_amount()) {
        let words = amount_to_words(amount).unwrap();
        prop_assert!(!words.contains("CENT"), "unexpected cents clause in {words:?}");
        prop_assert!(
            words.ends_with("DOLLAR") || words.ends_with("DOLLARS"),
            "dollar clause not terminal in {words:?}"
        );
    }

    /// *For any* amount with nonzero cents, the output SHALL end with the
    /// cent unit word.
    #[test]
    fn prop_fractional_amounts_end_with_cents(cents in 1i64..=99) {
        let amount = Decimal::new(cents, 2);
        let words = amount_to_words(amount).unwrap();
        prop_assert!(
            words.ends_with("CENT") || words.ends_with("CENTS"),
            "cents clause not terminal in {words:?}"
        );
    }

    /// *For any* amount, every `AND` token SHALL follow either a hundreds
    /// word or the dollar unit word - never a scale label.
    #[test]
    fn prop_and_never_joins_scale_groups(amount in any_amount()) {
        let words = amount_to_words(amount).unwrap();
        let tokens: Vec<&str> = words.split(' ').collect();
        for (i, token) in tokens.iter().enumerate() {
            if *token == "AND" {
                prop_assert!(i > 0, "AND at start of {words:?}");
                let before = tokens[i - 1];
                prop_assert!(
                    matches!(before, "HUNDRED" | "DOLLAR" | "DOLLARS"),
                    "AND after {before} in {words:?}"
                );
            }
        }
    }
}
