//! Display formatting for monetary amounts.
//!
//! VND renders as `.`-grouped integral digits with a trailing `₫`; USD as
//! `,`-grouped digits with exactly two fraction digits and a `$` prefix.
//! The sign always precedes the digits: `-15.000₫`, `-$1,234.50`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{USD_DISPLAY_PRECISION, VND_DISPLAY_PRECISION};

use super::money_model::Currency;

/// Renders an amount for the given display currency.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    match currency {
        Currency::Vnd => format_vnd(amount),
        Currency::Usd => format_usd(amount),
    }
}

/// `1234567` -> `1.234.567₫`
pub fn format_vnd(amount: Decimal) -> String {
    let (negative, digits) = vnd_parts(amount);
    let grouped = group_digits(&digits, '.');
    if negative {
        format!("-{}₫", grouped)
    } else {
        format!("{}₫", grouped)
    }
}

/// `1234.5` -> `$1,234.50`
pub fn format_usd(amount: Decimal) -> String {
    let (negative, int_digits, fraction) = usd_parts(amount);
    let grouped = group_digits(&int_digits, ',');
    if negative {
        format!("-${}.{}", grouped, fraction)
    } else {
        format!("${}.{}", grouped, fraction)
    }
}

/// Symbol-free variant for editable text fields; same grouping rules,
/// no currency glyph. Used when round-tripping a value back into an
/// input control.
pub fn format_for_input(amount: Decimal, currency: Currency) -> String {
    match currency {
        Currency::Vnd => {
            let (negative, digits) = vnd_parts(amount);
            let grouped = group_digits(&digits, '.');
            if negative {
                format!("-{}", grouped)
            } else {
                grouped
            }
        }
        Currency::Usd => {
            let (negative, int_digits, fraction) = usd_parts(amount);
            let grouped = group_digits(&int_digits, ',');
            if negative {
                format!("-{}.{}", grouped, fraction)
            } else {
                format!("{}.{}", grouped, fraction)
            }
        }
    }
}

fn vnd_parts(amount: Decimal) -> (bool, String) {
    let rounded =
        amount.round_dp_with_strategy(VND_DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    (rounded < Decimal::ZERO, rounded.abs().to_string())
}

fn usd_parts(amount: Decimal) -> (bool, String, String) {
    let rounded =
        amount.round_dp_with_strategy(USD_DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    match text.split_once('.') {
        Some((int_digits, fraction)) => (negative, int_digits.to_string(), format!("{:0<2}", fraction)),
        None => (negative, text, "00".to_string()),
    }
}

/// Inserts `separator` every three digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
