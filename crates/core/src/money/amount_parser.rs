//! Free-form amount parsing.
//!
//! The dot character is syntactically overloaded between the two supported
//! locales: USD input groups with `,` and uses `.` for decimals, VND input
//! groups with `.` and has no fractional part. A trailing run of exactly
//! 1-2 digits after the last dot is the only reliable local signal
//! separating "decimal cents" from "thousands grouping" without a currency
//! hint, since VND amounts are always integral.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::money_errors::MoneyError;

lazy_static! {
    /// A dot followed by exactly 1-2 trailing digits marks decimal-point
    /// notation (the USD grammar).
    static ref DECIMAL_TAIL_REGEX: Regex =
        Regex::new(r"\.[0-9]{1,2}$").expect("Invalid regex pattern");
}

/// Parses a free-form amount string into a `Decimal`.
///
/// Grammar selection, first match wins:
/// 1. currency glyphs (`₫`, `đ`, `$`) and whitespace are stripped;
/// 2. a 1-2 digit decimal tail selects the USD grammar (strip `,`);
/// 3. any remaining dot selects the VND grammar (every `.` groups
///    thousands);
/// 4. otherwise `,` is stripped as a thousands separator.
///
/// `"1.50"` therefore always reads as the USD decimal 1.50 and `"1.500"`
/// as the VND grouping 1500; the tie-break is deliberate, not an accident.
pub fn parse_amount(text: &str) -> Result<Decimal, MoneyError> {
    let cleaned: String = text
        .chars()
        .filter(|&c| !matches!(c, '₫' | 'đ' | '$') && !c.is_whitespace())
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(MoneyError::ParseFailure(text.to_string()));
    }

    let digits = if DECIMAL_TAIL_REGEX.is_match(&cleaned) {
        cleaned.replace(',', "")
    } else if cleaned.contains('.') {
        cleaned.replace(['.', ','], "")
    } else {
        cleaned.replace(',', "")
    };

    Decimal::from_str(&digits).map_err(|_| MoneyError::ParseFailure(text.to_string()))
}
