//! Exchange rate types and logic.

use money_problem_shared::{Currency, Money};

/// Directed exchange rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Exchange rate (1 `from` = `rate` `to`).
    pub rate: f64,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(from: Currency, to: Currency, rate: f64) -> Self {
        Self { from, to, rate }
    }

    /// Returns the inverse rate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            rate: 1.0 / self.rate,
        }
    }

    /// Key of this rate in a rate table.
    #[must_use]
    pub const fn key(&self) -> (Currency, Currency) {
        (self.from, self.to)
    }

    /// Converts `money` with this rate. The caller guarantees that
    /// `money.currency == self.from`.
    #[must_use]
    pub fn apply(&self, money: Money) -> Money {
        Money::new(money.amount * self.rate, self.to)
    }
}
