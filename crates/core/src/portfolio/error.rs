//! Portfolio error types.

use thiserror::Error;

use crate::bank::MissingExchangeRate;

/// One or more portfolio entries could not be converted.
///
/// Holds every failure in entry order and displays as
/// `Missing exchange rate(s): [USD->EUR],[KRW->EUR]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing exchange rate(s): {}", bracketed(.0))]
pub struct MissingExchangeRates(pub Vec<MissingExchangeRate>);

fn bracketed(failures: &[MissingExchangeRate]) -> String {
    failures
        .iter()
        .map(|missing| format!("[{missing}]"))
        .collect::<Vec<_>>()
        .join(",")
}

impl MissingExchangeRates {
    /// Underlying failures, in entry order.
    #[must_use]
    pub fn failures(&self) -> &[MissingExchangeRate] {
        &self.0
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "MISSING_EXCHANGE_RATES"
    }
}
