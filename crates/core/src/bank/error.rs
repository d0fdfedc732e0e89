//! Bank error types.

use money_problem_shared::Currency;
use thiserror::Error;

/// Errors raised while registering exchange rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankError {
    /// A pivot-anchored rate was given for the pivot currency itself.
    #[error("Can not add an exchange rate for the pivot currency")]
    PivotCurrency,

    /// Rate is zero, negative or not a finite number.
    #[error("Exchange rate should be greater than 0")]
    InvalidRate,

    /// A direct rate was given from a currency to itself.
    #[error("Can not add an exchange rate from a currency to itself")]
    SameCurrency,
}

impl BankError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PivotCurrency => "PIVOT_CURRENCY",
            Self::InvalidRate => "INVALID_RATE",
            Self::SameCurrency => "SAME_CURRENCY",
        }
    }
}

/// No direct or pivot-mediated rate exists between two currencies.
///
/// Displays as `FROM->TO`, e.g. `EUR->KRW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{from}->{to}")]
pub struct MissingExchangeRate {
    /// Currency of the amount being converted.
    pub from: Currency,
    /// Requested target currency.
    pub to: Currency,
}

impl MissingExchangeRate {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "MISSING_EXCHANGE_RATE"
    }
}
