//! Per-entry conversion outcome.

use money_problem_shared::Money;

use crate::bank::MissingExchangeRate;

/// Result of converting a single portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionOutcome {
    /// The entry converted into the target currency.
    Success(Money),
    /// No route existed for the entry.
    Failure(MissingExchangeRate),
}

impl ConversionOutcome {
    /// Returns true for [`ConversionOutcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converted money, if the conversion succeeded.
    #[must_use]
    pub const fn success(&self) -> Option<Money> {
        match self {
            Self::Success(money) => Some(*money),
            Self::Failure(_) => None,
        }
    }

    /// Missing rate, if the conversion failed.
    #[must_use]
    pub const fn failure(&self) -> Option<MissingExchangeRate> {
        match self {
            Self::Success(_) => None,
            Self::Failure(missing) => Some(*missing),
        }
    }
}

impl From<Result<Money, MissingExchangeRate>> for ConversionOutcome {
    fn from(result: Result<Money, MissingExchangeRate>) -> Self {
        match result {
            Ok(money) => Self::Success(money),
            Err(missing) => Self::Failure(missing),
        }
    }
}
