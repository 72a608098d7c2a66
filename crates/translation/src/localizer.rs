//! Message localization pipeline.
//!
//! Fixed order per invocation: currency rewrite (numerals are
//! language-independent, so they go first), symbol protection, cached or
//! live translation, symbol restoration. Reordering would let the
//! translation pass corrupt currency tokens.
//!
//! Translation is best-effort; currency correctness is not. A failed
//! translation returns the currency-correct untranslated message, and
//! the cache is written only after a successful translation, so an
//! abandoned call leaves no partial entry.

use log::warn;
use moneta_core::money::{rewrite_message_currency, Currency, RateProviderTrait};
use std::sync::Arc;

use crate::cache::TranslationCache;
use crate::symbol_guard;
use crate::translator::Translator;

pub struct MessageLocalizer {
    translator: Arc<dyn Translator>,
    cache: TranslationCache,
    rate_provider: Arc<dyn RateProviderTrait>,
}

impl MessageLocalizer {
    pub fn new(
        translator: Arc<dyn Translator>,
        cache: TranslationCache,
        rate_provider: Arc<dyn RateProviderTrait>,
    ) -> Self {
        Self {
            translator,
            cache,
            rate_provider,
        }
    }

    /// Full pipeline: currency rewriting, then best-effort translation.
    pub async fn localize_message(&self, message: &str, display: Currency) -> String {
        let rewritten = self.localize_currency_only(message, display);
        self.translate_protected(&rewritten).await
    }

    /// Currency rewriting only, for call sites that need just that concern.
    pub fn localize_currency_only(&self, message: &str, display: Currency) -> String {
        let rate = match self.rate_provider.latest_rate() {
            Ok(rate) => rate,
            Err(e) => {
                warn!("Exchange-rate provider failed, using fallback rate: {}", e);
                None
            }
        };
        rewrite_message_currency(message, display, rate.as_ref())
    }

    /// Translation only, without currency rewriting.
    pub async fn localize_translation_only(&self, message: &str) -> String {
        self.translate_protected(message).await
    }

    async fn translate_protected(&self, message: &str) -> String {
        let protected = symbol_guard::protect(message);

        let translated = match self.cache.get(&protected.text) {
            Some(hit) => hit,
            None => match self.translator.translate(&protected.text).await {
                Ok(translated) => {
                    self.cache.put(&protected.text, &translated);
                    translated
                }
                Err(e) => {
                    warn!("Translation failed, returning untranslated message: {}", e);
                    return message.to_string();
                }
            },
        };

        symbol_guard::restore(&translated, &protected)
    }
}
