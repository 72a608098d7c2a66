//! The machine-translation capability boundary.
//!
//! Translation is consumed as an opaque async `translate(text) -> text`
//! capability so hosts can plug in on-device models or remote services.
//! [`MyMemoryTranslator`] is the HTTP implementation shipped with Moneta.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::TranslationError;

/// An opaque text translation capability. Implementations may be slow
/// (remote call, on-device inference with model download); callers must
/// not block a UI thread on them.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

const MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Translator backed by the MyMemory public API.
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    langpair: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: MyMemoryData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            langpair: format!("{}|{}", source_lang, target_lang),
        }
    }

    /// The pair Moneta ships with.
    pub fn english_to_vietnamese() -> Self {
        Self::new("en", "vi")
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(MYMEMORY_ENDPOINT)
            .query(&[("q", text), ("langpair", self.langpair.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: MyMemoryResponse = response.json().await?;
        let translated = body.response_data.translated_text;
        if translated.trim().is_empty() {
            return Err(TranslationError::InvalidResponse(
                "empty translatedText".to_string(),
            ));
        }
        Ok(translated)
    }
}
