//! Core error types for the Moneta application.
//!
//! This module defines platform-agnostic error types. Host-specific
//! failures (storage, network) are converted to these types at the
//! boundary by the crates that own them.

use thiserror::Error;

use crate::money::MoneyError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the Moneta core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
