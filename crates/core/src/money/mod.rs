//! Money module - currency models, parsing, formatting and conversion.

mod amount_formatter;
mod amount_parser;
mod currency_converter;
mod money_errors;
mod money_model;
mod money_traits;
mod rewriter;

pub use amount_formatter::{format_amount, format_for_input, format_usd, format_vnd};
pub use amount_parser::parse_amount;
pub use currency_converter::{convert, effective_rate, usd_to_vnd, vnd_to_usd};
pub use money_errors::MoneyError;
pub use money_model::{AmountToken, Currency, ExchangeRate};
pub use money_traits::{RateProviderTrait, StaticRateProvider};
pub use rewriter::{format_currency_in_message, rewrite_message_currency, scan_amount_tokens};
