//! Money in mixed currencies and its evaluation through a bank.

pub mod error;
pub mod outcome;
pub mod service;

#[cfg(test)]
mod props;

pub use error::MissingExchangeRates;
pub use outcome::ConversionOutcome;
pub use service::Portfolio;
