//! Display-time conversion between the canonical storage currency (VND)
//! and USD.
//!
//! Stored amounts are always VND; converting to USD is strictly a
//! display-time operation and never mutates stored values. An absent or
//! non-positive rate falls back to [`DEFAULT_USD_VND_RATE`] - rates may
//! simply not have loaded yet, so this is a recoverable condition rather
//! than an error.

use log::warn;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_USD_VND_RATE;

use super::money_model::{Currency, ExchangeRate};

/// Resolves the usable VND-per-USD rate, falling back to the default.
pub fn effective_rate(rate: Option<&ExchangeRate>) -> Decimal {
    match rate {
        Some(r) if r.is_usable() => r.usd_to_vnd,
        Some(r) => {
            warn!(
                "Non-positive USD/VND rate {}, using fallback {}",
                r.usd_to_vnd, DEFAULT_USD_VND_RATE
            );
            DEFAULT_USD_VND_RATE
        }
        None => DEFAULT_USD_VND_RATE,
    }
}

pub fn vnd_to_usd(amount: Decimal, rate: Option<&ExchangeRate>) -> Decimal {
    amount / effective_rate(rate)
}

pub fn usd_to_vnd(amount: Decimal, rate: Option<&ExchangeRate>) -> Decimal {
    amount * effective_rate(rate)
}

/// Converts between the supported currencies; same-currency conversion
/// returns the amount untouched.
pub fn convert(amount: Decimal, from: Currency, to: Currency, rate: Option<&ExchangeRate>) -> Decimal {
    match (from, to) {
        (Currency::Vnd, Currency::Usd) => vnd_to_usd(amount, rate),
        (Currency::Usd, Currency::Vnd) => usd_to_vnd(amount, rate),
        _ => amount,
    }
}
