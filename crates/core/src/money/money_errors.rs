use thiserror::Error;

/// Errors produced by the money parsing and conversion layer.
#[derive(Error, Debug)]
pub enum MoneyError {
    /// Input contained no parseable numeric content.
    #[error("No numeric content in '{0}'")]
    ParseFailure(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
