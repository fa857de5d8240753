//! English-words rendering of monetary amounts.
//!
//! The output grammar: an optional `MINUS`, a dollars clause, and an
//! optional ` AND <n> CENT(S)` clause. Within a three-digit group, `AND`
//! joins the hundreds word to a nonzero remainder (`ONE HUNDRED AND FIVE`);
//! it never appears between scale groups.

use rust_decimal::Decimal;

use super::amount::AmountParts;
use super::error::WordsError;

/// Number names for 0-19. Index 0 is unused; 11-19 are irregular forms.
const ONES: [&str; 20] = [
    "",
    "ONE",
    "TWO",
    "THREE",
    "FOUR",
    "FIVE",
    "SIX",
    "SEVEN",
    "EIGHT",
    "NINE",
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];

/// Names for the tens digit. Indices 0 and 1 are unused.
const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Scale labels per base-1000 group. Seven entries cover every `i64`.
const SCALES: [&str; 7] = [
    "",
    "THOUSAND",
    "MILLION",
    "BILLION",
    "TRILLION",
    "QUADRILLION",
    "QUINTILLION",
];

/// Converts a signed decimal dollar amount into English words.
///
/// The amount is rounded to cents with banker's rounding before
/// rendering. A zero amount (including negative zero) is exactly
/// `"ZERO DOLLARS"` with no cents clause.
///
/// # Errors
///
/// Returns [`WordsError::OutOfRange`] when the whole-dollar magnitude
/// does not fit in an `i64`.
pub fn amount_to_words(amount: Decimal) -> Result<String, WordsError> {
    let parts = AmountParts::split(amount)?;

    if parts.is_zero() {
        return Ok("ZERO DOLLARS".to_string());
    }

    let mut words = String::new();

    if parts.negative {
        words.push_str("MINUS ");
    }

    if parts.whole > 0 {
        words.push_str(&whole_number_words(parts.whole));
        words.push_str(if parts.whole == 1 { " DOLLAR" } else { " DOLLARS" });
    } else {
        // Cents-only amounts still spell out the dollar clause.
        words.push_str("ZERO DOLLARS");
    }

    if parts.cents > 0 {
        words.push_str(" AND ");
        words.push_str(&whole_number_words(u64::from(parts.cents)));
        words.push_str(if parts.cents == 1 { " CENT" } else { " CENTS" });
    }

    Ok(words)
}

/// Renders a nonnegative integer as words, most-significant group first.
///
/// Zero-valued groups are skipped entirely: 1,001,001 renders as
/// `ONE MILLION ONE THOUSAND ONE`.
fn whole_number_words(mut n: u64) -> String {
    if n == 0 {
        return "ZERO".to_string();
    }

    let mut groups: Vec<String> = Vec::new();
    let mut scale = 0;

    while n > 0 {
        let group = n % 1000;
        if group != 0 {
            let mut words = three_digit_words(group);
            if !SCALES[scale].is_empty() {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            groups.push(words);
        }
        n /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// Renders a three-digit group value in `1..=999`.
#[allow(clippy::cast_possible_truncation)]
fn three_digit_words(n: u64) -> String {
    let mut words = String::new();

    let hundreds = (n / 100) as usize;
    let remainder = (n % 100) as usize;

    if hundreds > 0 {
        words.push_str(ONES[hundreds]);
        words.push_str(" HUNDRED");
        if remainder > 0 {
            words.push_str(" AND ");
        }
    }

    if remainder > 0 {
        if remainder < 20 {
            words.push_str(ONES[remainder]);
        } else {
            words.push_str(TENS[remainder / 10]);
            if remainder % 10 > 0 {
                words.push('-');
                words.push_str(ONES[remainder % 10]);
            }
        }
    }

    words
}
