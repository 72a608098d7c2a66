use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The currencies Moneta renders. VND is the canonical storage currency;
/// amounts arrive from the backend in VND regardless of display preference.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Vnd,
    Usd,
}

impl Currency {
    /// Maps the stored display preference flag onto a currency.
    pub fn from_is_vnd(is_vnd: bool) -> Self {
        if is_vnd {
            Currency::Vnd
        } else {
            Currency::Usd
        }
    }

    pub fn is_vnd(&self) -> bool {
        matches!(self, Currency::Vnd)
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Vnd => "VND",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Vnd => "₫",
            Currency::Usd => "$",
        }
    }
}

/// A VND-per-USD exchange rate supplied by an external provider.
/// Immutable per use; refreshing is the provider's concern.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub usd_to_vnd: Decimal,
    pub as_of: DateTime<Utc>,
}

impl ExchangeRate {
    pub fn new(usd_to_vnd: Decimal, as_of: DateTime<Utc>) -> Self {
        Self { usd_to_vnd, as_of }
    }

    /// True when the rate can be used as a divisor.
    pub fn is_usable(&self) -> bool {
        self.usd_to_vnd > Decimal::ZERO
    }
}

/// A monetary amount recognized inside a message. Produced and consumed
/// within a single rewrite pass; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountToken {
    /// The matched substring, exactly as it appears in the message.
    pub raw_text: String,
    pub value: Decimal,
    pub source: Currency,
    pub span: Range<usize>,
}
