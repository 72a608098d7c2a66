//! Currency-glyph protection across machine translation.
//!
//! Generic translation may mistranslate, drop, or reflow a standalone
//! currency glyph. Stable all-caps ASCII placeholders are
//! translation-invariant tokens no model rewrites, so glyphs are swapped
//! out before translating and swapped back afterwards.

use log::warn;

/// Placeholder table. The Vietnamese letter `đ` is deliberately absent:
/// it is ordinary orthography, and protecting it would corrupt prose.
const SYMBOL_PLACEHOLDERS: &[(&str, &str)] = &[("₫", "VNDCURRENCY"), ("$", "USDCURRENCY")];

/// A message with its currency glyphs swapped for placeholders, plus the
/// mapping needed to undo the swap. Built fresh per call, never persisted.
#[derive(Debug, Clone)]
pub struct ProtectedMessage {
    pub text: String,
    placeholders: Vec<(&'static str, &'static str)>,
}

/// Replaces each currency glyph present with its ASCII placeholder.
pub fn protect(text: &str) -> ProtectedMessage {
    let mut protected = text.to_string();
    let mut placeholders = Vec::new();
    for (symbol, placeholder) in SYMBOL_PLACEHOLDERS {
        if protected.contains(symbol) {
            protected = protected.replace(symbol, placeholder);
            placeholders.push((*placeholder, *symbol));
        }
    }
    ProtectedMessage {
        text: protected,
        placeholders,
    }
}

/// Restores the glyphs recorded by [`protect`]. A placeholder the
/// translation pass destroyed is logged and left as-is - degraded
/// output, never a crash.
pub fn restore(text: &str, guard: &ProtectedMessage) -> String {
    let mut restored = text.to_string();
    for (placeholder, symbol) in &guard.placeholders {
        if restored.contains(placeholder) {
            restored = restored.replace(placeholder, symbol);
        } else {
            warn!("Placeholder {} missing after translation", placeholder);
        }
    }
    restored
}
