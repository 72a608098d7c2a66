//! Message currency rewriting.
//!
//! Scans a natural-language message for embedded amount tokens and
//! rewrites each in place for the user's display currency. Patterns run
//! as an ordered list of passes over the same string - each pass operates
//! on the result of the previous one, and the passes stay disjoint in
//! practice because every pattern targets a different literal suffix or
//! symbol. The numeric group of a match goes through [`parse_amount`], so
//! a token a previous pass already formatted re-reads to the same value.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::amount_formatter::format_amount;
use super::amount_parser::parse_amount;
use super::currency_converter::convert;
use super::money_model::{AmountToken, Currency, ExchangeRate};

lazy_static! {
    /// `$123.45`, `$1,234` - dollar-symbol amounts.
    static ref USD_SYMBOL_REGEX: Regex =
        Regex::new(r"\$([0-9,]+\.?[0-9]*)").expect("Invalid regex pattern");

    /// `123.45₫`, `5000đ`, `1.500.000₫` - dong-suffixed amounts. The
    /// first alternative claims dot-grouped tokens whole so a later pass
    /// (or a second run) re-reads its own output to the same value.
    static ref VND_SYMBOL_REGEX: Regex =
        Regex::new(r"([0-9]{1,3}(?:\.[0-9]{3})+|[0-9,]+\.?[0-9]*)[₫đ]").expect("Invalid regex pattern");

    /// `123456 VND` - word-suffixed amounts.
    static ref VND_WORD_REGEX: Regex =
        Regex::new(r"([0-9,]+\.?[0-9]*)\s*VND").expect("Invalid regex pattern");

    /// Bare integers of at least four digits are assumed to be VND
    /// amounts. Known false-positive risk on large USD amounts whose `$`
    /// was stripped upstream; backend message formats are not formally
    /// specified, so the heuristic stands as documented. The optional
    /// decimal tail consumes a canonical `425000.00` token whole instead
    /// of splitting it at the dot.
    static ref BARE_AMOUNT_REGEX: Regex =
        Regex::new(r"\b([0-9]{4,}(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)\b").expect("Invalid regex pattern");

    /// Canonical backend decimal shape. The regex crate has no
    /// look-around, so the exclusions are optional captures that veto the
    /// match: a trailing `%` marks a percentage, a surrounding `$`/`₫`/`đ`
    /// marks a token some other pass already owns.
    static ref CANONICAL_DECIMAL_REGEX: Regex =
        Regex::new(r"(\$?)([0-9]+\.[0-9]{2})([₫đ]|\s*%)?").expect("Invalid regex pattern");
}

/// Ordered token passes; each pattern is paired with the currency its
/// matches denominate.
fn token_passes() -> [(&'static Regex, Currency); 4] {
    [
        (&USD_SYMBOL_REGEX, Currency::Usd),
        (&VND_SYMBOL_REGEX, Currency::Vnd),
        (&VND_WORD_REGEX, Currency::Vnd),
        (&BARE_AMOUNT_REGEX, Currency::Vnd),
    ]
}

/// Rewrites every recognized amount token for the display currency,
/// converting when the token's source currency differs from it.
///
/// Pure string transform; a token whose numeric group fails to parse is
/// left as-is in the output.
pub fn rewrite_message_currency(
    message: &str,
    display: Currency,
    rate: Option<&ExchangeRate>,
) -> String {
    let mut output = message.to_string();
    for (regex, source) in token_passes() {
        output = regex
            .replace_all(&output, |caps: &Captures| {
                rewrite_token(caps, source, display, rate)
            })
            .into_owned();
    }
    output
}

/// Stricter currency-only variant targeting the canonical `\d+.\d{2}`
/// shape the backend emits, read as stored-VND amounts. A match followed
/// by `%` is a percentage, never an amount, and stays untouched.
pub fn format_currency_in_message(
    message: &str,
    display: Currency,
    rate: Option<&ExchangeRate>,
) -> String {
    CANONICAL_DECIMAL_REGEX
        .replace_all(message, |caps: &Captures| {
            let already_denominated = !caps[1].is_empty() || caps.get(3).is_some();
            if already_denominated {
                return caps[0].to_string();
            }
            match parse_amount(&caps[2]) {
                Ok(value) => format_amount(convert(value, Currency::Vnd, display, rate), display),
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn rewrite_token(
    caps: &Captures,
    source: Currency,
    display: Currency,
    rate: Option<&ExchangeRate>,
) -> String {
    match parse_amount(&caps[1]) {
        Ok(value) => format_amount(convert(value, source, display, rate), display),
        Err(_) => caps[0].to_string(),
    }
}

/// Scans a message for amount tokens without rewriting them. Earlier
/// patterns claim their spans first; a later pattern never re-reports an
/// overlapping region.
pub fn scan_amount_tokens(message: &str) -> Vec<AmountToken> {
    let mut tokens: Vec<AmountToken> = Vec::new();
    for (regex, source) in token_passes() {
        for caps in regex.captures_iter(message) {
            let (whole, group) = match (caps.get(0), caps.get(1)) {
                (Some(whole), Some(group)) => (whole, group),
                _ => continue,
            };
            let span = whole.range();
            if tokens.iter().any(|t| t.span.start < span.end && span.start < t.span.end) {
                continue;
            }
            if let Ok(value) = parse_amount(group.as_str()) {
                tokens.push(AmountToken {
                    raw_text: whole.as_str().to_string(),
                    value,
                    source,
                    span,
                });
            }
        }
    }
    tokens.sort_by_key(|t| t.span.start);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn rate(usd_to_vnd: Decimal) -> ExchangeRate {
        ExchangeRate::new(usd_to_vnd, Utc::now())
    }

    #[test]
    fn test_usd_token_converted_to_vnd() {
        let r = rate(dec!(24000));
        let out = rewrite_message_currency("You received $10 today", Currency::Vnd, Some(&r));
        assert_eq!(out, "You received 240.000₫ today");
    }

    #[test]
    fn test_vnd_symbol_token_converted_to_usd() {
        let r = rate(dec!(25000));
        let out = rewrite_message_currency("Spent 100000₫ on food", Currency::Usd, Some(&r));
        assert_eq!(out, "Spent $4.00 on food");
    }

    #[test]
    fn test_vnd_word_token() {
        let r = rate(dec!(25000));
        let out = rewrite_message_currency("Balance: 250000 VND", Currency::Usd, Some(&r));
        assert_eq!(out, "Balance: $10.00");
        let out = rewrite_message_currency("Balance: 250000 VND", Currency::Vnd, Some(&r));
        assert_eq!(out, "Balance: 250.000₫");
    }

    #[test]
    fn test_bare_large_integer_assumed_vnd() {
        let r = rate(dec!(25000));
        let out = rewrite_message_currency("You spent 425000 today", Currency::Usd, Some(&r));
        assert_eq!(out, "You spent $17.00 today");
        // Three digits and below are not treated as amounts.
        let out = rewrite_message_currency("Took 300 steps", Currency::Usd, Some(&r));
        assert_eq!(out, "Took 300 steps");
    }

    #[test]
    fn test_bare_decimal_token_consumed_whole() {
        let r = rate(dec!(25000));
        let out = rewrite_message_currency(
            "You have spent 425000.00 of your budget 500000.00 (85%)",
            Currency::Usd,
            Some(&r),
        );
        assert_eq!(out, "You have spent $17.00 of your budget $20.00 (85%)");
    }

    #[test]
    fn test_grouped_vnd_token_consumed_whole() {
        let r = rate(dec!(25000));
        let out = rewrite_message_currency("Saved 1.500.000₫ this month", Currency::Usd, Some(&r));
        assert_eq!(out, "Saved $60.00 this month");
    }

    #[test]
    fn test_same_currency_tokens_are_normalized() {
        let out = rewrite_message_currency("Spent 1500000đ", Currency::Vnd, None);
        assert_eq!(out, "Spent 1.500.000₫");
        let out = rewrite_message_currency("Paid $5", Currency::Usd, None);
        assert_eq!(out, "Paid $5.00");
    }

    #[test]
    fn test_later_pass_leaves_earlier_output_intact() {
        // The first pass converts $10 into a dong-suffixed token; the dong
        // pass re-reads 240.000 through the VND grammar and re-emits it.
        let r = rate(dec!(24000));
        let once = rewrite_message_currency("$10", Currency::Vnd, Some(&r));
        assert_eq!(once, "240.000₫");
        let twice = rewrite_message_currency(&once, Currency::Vnd, Some(&r));
        assert_eq!(twice, once);
    }

    #[test]
    fn test_strict_variant_converts_canonical_decimals() {
        let r = rate(dec!(25000));
        let out = format_currency_in_message(
            "You have spent 425000.00 of your budget 500000.00 (85%)",
            Currency::Usd,
            Some(&r),
        );
        assert_eq!(out, "You have spent $17.00 of your budget $20.00 (85%)");

        let out = format_currency_in_message(
            "You have spent 425000.00 of your budget 500000.00 (85%)",
            Currency::Vnd,
            Some(&r),
        );
        assert_eq!(out, "You have spent 425.000₫ of your budget 500.000₫ (85%)");
    }

    #[test]
    fn test_strict_variant_excludes_percentages() {
        let r = rate(dec!(25000));
        let out = format_currency_in_message("You used 87.50% of budget", Currency::Usd, Some(&r));
        assert_eq!(out, "You used 87.50% of budget");
        let out = format_currency_in_message("You used 87.50 % of budget", Currency::Usd, Some(&r));
        assert_eq!(out, "You used 87.50 % of budget");
    }

    #[test]
    fn test_percentages_survive_general_rewrite() {
        let r = rate(dec!(25000));
        let out = rewrite_message_currency("You used 87.50% of budget", Currency::Usd, Some(&r));
        assert_eq!(out, "You used 87.50% of budget");
    }

    #[test]
    fn test_strict_variant_skips_already_denominated_tokens() {
        let r = rate(dec!(25000));
        let out = format_currency_in_message("Refund of $12.50 processed", Currency::Usd, Some(&r));
        assert_eq!(out, "Refund of $12.50 processed");
        let out = format_currency_in_message("Refund of 12.50₫ processed", Currency::Vnd, Some(&r));
        assert_eq!(out, "Refund of 12.50₫ processed");
    }

    #[test]
    fn test_unparseable_token_left_as_is() {
        // The numeric group of the dong pass can be pure separators.
        let out = rewrite_message_currency("Odd token ,,,₫ here", Currency::Usd, None);
        assert_eq!(out, "Odd token ,,,₫ here");
    }

    #[test]
    fn test_scan_reports_tokens_without_rewriting() {
        let tokens = scan_amount_tokens("Spent $17.00 of 500000 (85%)");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].raw_text, "$17.00");
        assert_eq!(tokens[0].value, dec!(17.00));
        assert_eq!(tokens[0].source, Currency::Usd);
        assert_eq!(tokens[1].raw_text, "500000");
        assert_eq!(tokens[1].value, dec!(500000));
        assert_eq!(tokens[1].source, Currency::Vnd);
    }

    #[test]
    fn test_scan_does_not_double_report_overlaps() {
        // 250000 is claimed by the VND-word pass; the bare pass must not
        // report it again.
        let tokens = scan_amount_tokens("Balance: 250000 VND");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].source, Currency::Vnd);
        assert_eq!(tokens[0].value, dec!(250000));
    }
}
