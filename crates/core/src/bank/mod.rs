//! Exchange rate table and currency conversion.
//!
//! This module implements:
//! - Directed exchange rates and their inverses
//! - The pivot-anchored, immutable `Bank`
//! - Conversion, directly or through the pivot currency
//! - Error types for rate registration and missing rates

pub mod error;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use error::{BankError, MissingExchangeRate};
pub use exchange::ExchangeRate;
pub use service::Bank;
