//! Rule-based English→Vietnamese translation for budget notifications.
//!
//! Generic machine translation of terse status strings ("Warning: 87% of
//! budget") produces low-quality output, so the closed set of
//! backend-emitted budget sentences is handled by an ordered rule table
//! instead. The table trades generality for precision: first match wins,
//! later rules are unreachable once an earlier one matches, and an
//! unknown shape passes through untranslated - the table never guesses.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use moneta_core::money::{
    format_amount, format_currency_in_message, rewrite_message_currency, scan_amount_tokens,
    Currency, ExchangeRate,
};

lazy_static! {
    static ref PERCENT_REGEX: Regex =
        Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").expect("Invalid regex pattern");
    static ref DAYS_LEFT_REGEX: Regex =
        Regex::new(r"([0-9]+)\s*days?\s+left").expect("Invalid regex pattern");
}

/// Vietnamese diacritics used by the idempotence guard. The bare letter
/// `đ` is excluded: it doubles as a currency suffix in backend messages
/// and would misfire.
const VIETNAMESE_MARKERS: &str =
    "àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵ";

fn contains_vietnamese(text: &str) -> bool {
    text.chars()
        .flat_map(char::to_lowercase)
        .any(|c| VIETNAMESE_MARKERS.contains(c))
}

/// Values extracted from a notification before a handler rebuilds it:
/// already-locale-converted amounts, the percentage, the day count.
struct RuleContext {
    amounts: Vec<String>,
    percent: Option<String>,
    days_left: Option<String>,
}

impl RuleContext {
    fn extract(message: &str, display: Currency) -> Self {
        let amounts = scan_amount_tokens(message)
            .into_iter()
            .map(|token| format_amount(token.value, display))
            .collect();
        let percent = PERCENT_REGEX.captures(message).map(|c| c[1].to_string());
        let days_left = DAYS_LEFT_REGEX.captures(message).map(|c| c[1].to_string());
        Self {
            amounts,
            percent,
            days_left,
        }
    }
}

struct NotificationRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    render: fn(&RuleContext) -> Option<String>,
}

/// Ordered rule table - extend by adding entries, not control flow.
const RULES: &[NotificationRule] = &[
    NotificationRule {
        name: "spent_of_budget",
        matches: matches_spent_of_budget,
        render: render_spent_of_budget,
    },
    NotificationRule {
        name: "budget_exceeded",
        matches: matches_budget_exceeded,
        render: render_budget_exceeded,
    },
    NotificationRule {
        name: "budget_warning",
        matches: matches_budget_warning,
        render: render_budget_warning,
    },
    NotificationRule {
        name: "days_left",
        matches: matches_days_left,
        render: render_days_left,
    },
    NotificationRule {
        name: "budget_reset",
        matches: matches_budget_reset,
        render: render_budget_reset,
    },
];

/// Translates a budget notification into Vietnamese.
///
/// Currency conversion runs first, so handlers substitute
/// already-locale-converted values; an input that already carries
/// Vietnamese diacritics is returned unmodified (never double-translate),
/// and an unmatched shape passes through with only its amounts converted.
pub fn translate_budget_notification(
    message: &str,
    display: Currency,
    rate: Option<&ExchangeRate>,
) -> String {
    if contains_vietnamese(message) {
        return message.to_string();
    }

    let converted = rewrite_message_currency(
        &format_currency_in_message(message, display, rate),
        display,
        rate,
    );

    let context = RuleContext::extract(&converted, display);
    for rule in RULES {
        if (rule.matches)(&converted) {
            debug!("Budget notification matched rule '{}'", rule.name);
            return (rule.render)(&context).unwrap_or_else(|| converted.clone());
        }
    }
    converted
}

fn matches_spent_of_budget(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("spent") && lower.contains("budget")
}

fn render_spent_of_budget(context: &RuleContext) -> Option<String> {
    let spent = context.amounts.first()?;
    let total = context.amounts.get(1)?;
    Some(match &context.percent {
        Some(percent) => format!(
            "💰 Bạn đã chi tiêu {} trong tổng ngân sách {} ({}%)",
            spent, total, percent
        ),
        None => format!("💰 Bạn đã chi tiêu {} trong tổng ngân sách {}", spent, total),
    })
}

fn matches_budget_exceeded(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("exceed") || lower.contains("over budget")
}

fn render_budget_exceeded(context: &RuleContext) -> Option<String> {
    Some(match context.amounts.first() {
        Some(amount) => format!("🚨 Bạn đã vượt quá giới hạn ngân sách {}!", amount),
        None => "🚨 Bạn đã vượt quá giới hạn ngân sách!".to_string(),
    })
}

fn matches_budget_warning(message: &str) -> bool {
    message.to_lowercase().contains("warning")
}

fn render_budget_warning(context: &RuleContext) -> Option<String> {
    let percent = context.percent.as_ref()?;
    Some(format!(
        "⚠️ Cảnh báo: bạn đã sử dụng {}% ngân sách",
        percent
    ))
}

fn matches_days_left(message: &str) -> bool {
    DAYS_LEFT_REGEX.is_match(message)
}

fn render_days_left(context: &RuleContext) -> Option<String> {
    let days = context.days_left.as_ref()?;
    Some(format!("⏳ Còn lại {} ngày trong kỳ ngân sách", days))
}

fn matches_budget_reset(message: &str) -> bool {
    message.to_lowercase().contains("reset")
}

fn render_budget_reset(_context: &RuleContext) -> Option<String> {
    Some("🔄 Ngân sách của bạn đã được làm mới".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn rate() -> ExchangeRate {
        ExchangeRate::new(dec!(25000), Utc::now())
    }

    #[test]
    fn test_spent_of_budget_in_usd() {
        let out = translate_budget_notification(
            "You have spent 425000.00 of your budget 500000.00 (85%)",
            Currency::Usd,
            Some(&rate()),
        );
        assert_eq!(
            out,
            "💰 Bạn đã chi tiêu $17.00 trong tổng ngân sách $20.00 (85%)"
        );
    }

    #[test]
    fn test_spent_of_budget_in_vnd() {
        let out = translate_budget_notification(
            "You have spent 425000.00 of your budget 500000.00 (85%)",
            Currency::Vnd,
            Some(&rate()),
        );
        assert_eq!(
            out,
            "💰 Bạn đã chi tiêu 425.000₫ trong tổng ngân sách 500.000₫ (85%)"
        );
    }

    #[test]
    fn test_already_vietnamese_is_returned_unmodified() {
        let message = "💰 Bạn đã chi tiêu $17.00 trong tổng ngân sách $20.00 (85%)";
        let out = translate_budget_notification(message, Currency::Usd, Some(&rate()));
        assert_eq!(out, message);
    }

    #[test]
    fn test_translation_is_idempotent() {
        let message = "You have spent 425000.00 of your budget 500000.00 (85%)";
        let once = translate_budget_notification(message, Currency::Usd, Some(&rate()));
        let twice = translate_budget_notification(&once, Currency::Usd, Some(&rate()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_budget_exceeded_without_amount() {
        let out = translate_budget_notification("Budget limit exceeded", Currency::Vnd, None);
        assert_eq!(out, "🚨 Bạn đã vượt quá giới hạn ngân sách!");
    }

    #[test]
    fn test_budget_exceeded_with_amount() {
        let out = translate_budget_notification(
            "Budget exceeded by 50000 VND",
            Currency::Vnd,
            Some(&rate()),
        );
        assert_eq!(out, "🚨 Bạn đã vượt quá giới hạn ngân sách 50.000₫!");
    }

    #[test]
    fn test_warning_with_percentage() {
        let out = translate_budget_notification(
            "Warning: 87.50% of budget used",
            Currency::Usd,
            Some(&rate()),
        );
        assert_eq!(out, "⚠️ Cảnh báo: bạn đã sử dụng 87.50% ngân sách");
    }

    #[test]
    fn test_days_left() {
        let out = translate_budget_notification(
            "5 days left in this period",
            Currency::Vnd,
            None,
        );
        assert_eq!(out, "⏳ Còn lại 5 ngày trong kỳ ngân sách");
    }

    #[test]
    fn test_budget_reset() {
        let out = translate_budget_notification("Your budget was reset", Currency::Vnd, None);
        assert_eq!(out, "🔄 Ngân sách của bạn đã được làm mới");
    }

    #[test]
    fn test_first_match_wins() {
        // Contains both the spent-of-budget shape and a day count; the
        // earlier rule drives the output.
        let out = translate_budget_notification(
            "You have spent 425000.00 of your budget 500000.00, 3 days left",
            Currency::Usd,
            Some(&rate()),
        );
        assert_eq!(out, "💰 Bạn đã chi tiêu $17.00 trong tổng ngân sách $20.00");
    }

    #[test]
    fn test_unknown_shape_passes_through() {
        let out = translate_budget_notification(
            "Your wallet was synchronized",
            Currency::Usd,
            Some(&rate()),
        );
        assert_eq!(out, "Your wallet was synchronized");
    }

    #[test]
    fn test_matched_shape_without_extractable_values_passes_through() {
        // The spent rule matches but no amounts exist; never guess.
        let out = translate_budget_notification(
            "You have spent most of your budget",
            Currency::Usd,
            Some(&rate()),
        );
        assert_eq!(out, "You have spent most of your budget");
    }
}
