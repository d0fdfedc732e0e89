//! Portfolio: money in mixed currencies evaluated through a bank.

use money_problem_shared::{Currency, Money};
use tracing::{debug, warn};

use super::error::MissingExchangeRates;
use super::outcome::ConversionOutcome;
use crate::bank::Bank;

/// Immutable, ordered collection of amounts in any currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    moneys: Vec<Money>,
}

impl Portfolio {
    /// Creates a portfolio with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new portfolio with `money` appended.
    #[must_use]
    pub fn add(&self, money: Money) -> Self {
        let mut moneys = Vec::with_capacity(self.moneys.len() + 1);
        moneys.extend_from_slice(&self.moneys);
        moneys.push(money);
        Self { moneys }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moneys.len()
    }

    /// Returns true if the portfolio has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Money> {
        self.moneys.iter()
    }

    /// Evaluates the total value of the portfolio in `to`.
    ///
    /// Every entry is converted, even after a failure, so the error lists all
    /// missing rates in entry order. Amounts are summed in entry order.
    ///
    /// # Errors
    ///
    /// Returns [`MissingExchangeRates`] if any entry cannot be converted.
    pub fn evaluate(&self, bank: &Bank, to: Currency) -> Result<Money, MissingExchangeRates> {
        let outcomes = self.convert_all(bank, to);
        let entries = outcomes.len();

        let (failed, converted): (Vec<_>, Vec<_>) = outcomes
            .into_iter()
            .partition(ConversionOutcome::is_failure);
        if !failed.is_empty() {
            let failures: Vec<_> = failed
                .iter()
                .filter_map(ConversionOutcome::failure)
                .collect();
            warn!(
                entries,
                failures = failures.len(),
                %to,
                "portfolio evaluation failed"
            );
            return Err(MissingExchangeRates(failures));
        }

        let total = converted
            .iter()
            .filter_map(ConversionOutcome::success)
            .fold(0.0, |sum, money| sum + money.amount);
        debug!(entries, total, %to, "evaluated portfolio");

        Ok(Money::new(total, to))
    }

    fn convert_all(&self, bank: &Bank, to: Currency) -> Vec<ConversionOutcome> {
        self.moneys
            .iter()
            .map(|money| ConversionOutcome::from(bank.convert(*money, to)))
            .collect()
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Self {
            moneys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.moneys.iter()
    }
}
