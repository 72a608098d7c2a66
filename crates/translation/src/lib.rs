//! Moneta Translation - currency-aware message localization.
//!
//! Localizes backend notification strings: currency rewriting from
//! `moneta-core` runs first (numerals are language-independent), then
//! currency glyphs are protected behind ASCII placeholders, the prose is
//! machine-translated through a content-addressed cache, and the glyphs
//! are restored. A rule-based front end handles the closed family of
//! budget notification shapes where generic translation performs poorly.

pub mod cache;
pub mod errors;
pub mod localizer;
pub mod patterns;
pub mod symbol_guard;
pub mod translator;


pub use cache::{JsonFileStore, KeyValueStore, MemoryStore, TranslationCache};
pub use errors::TranslationError;
pub use localizer::MessageLocalizer;
pub use patterns::translate_budget_notification;
pub use symbol_guard::{protect, restore, ProtectedMessage};
pub use translator::{MyMemoryTranslator, Translator};
