//! Money type and the closed set of supported currencies.
//!
//! Amounts are plain `f64`. No rounding is ever applied, so comparisons of
//! derived amounts should go through [`Money::is_close_to`] with a
//! [`Tolerance`](super::Tolerance).

use serde::{Deserialize, Serialize};

use super::tolerance::Tolerance;

/// Represents a monetary amount with currency.
///
/// Equality is structural: two values are equal when both the amount and the
/// currency are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The signed amount.
    pub amount: f64,
    /// Currency the amount is expressed in.
    pub currency: Currency,
}

/// Currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// South Korean Won
    Krw,
}

impl Currency {
    /// Returns every supported currency.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Eur, Self::Usd, Self::Krw]
    }

    /// Returns the upper-case currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Krw => "KRW",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    /// Amount in euros.
    #[must_use]
    pub const fn euros(amount: f64) -> Self {
        Self::new(amount, Currency::Eur)
    }

    /// Amount in US dollars.
    #[must_use]
    pub const fn dollars(amount: f64) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Amount in South Korean won.
    #[must_use]
    pub const fn korean_wons(amount: f64) -> Self {
        Self::new(amount, Currency::Krw)
    }

    /// Returns true if both values share a currency and their amounts are
    /// within `tolerance` of each other.
    #[must_use]
    pub fn is_close_to(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.currency == other.currency && tolerance.accepts(self.amount, other.amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "KRW" => Ok(Self::Krw),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
