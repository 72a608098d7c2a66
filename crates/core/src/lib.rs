//! Moneta Core - money parsing, formatting and conversion.
//!
//! This crate contains the currency-handling core for Moneta. It is
//! platform-agnostic and defines the traits implemented by the host
//! application's exchange-rate collaborators.

pub mod constants;
pub mod errors;
pub mod money;

// Re-export common types from the money module
pub use money::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
