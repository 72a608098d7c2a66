use thiserror::Error;

/// Errors raised by the translation layer. All of them are absorbed
/// inside [`crate::localizer::MessageLocalizer`]; nothing here reaches
/// the UI layer.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The translation capability is unavailable or rejected the request.
    #[error("Translation provider error: {0}")]
    Provider(String),

    #[error("Translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed translation response: {0}")]
    InvalidResponse(String),

    #[error("Core error: {0}")]
    Core(#[from] moneta_core::Error),
}
