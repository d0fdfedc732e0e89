//! Bank: exchange rate table and currency conversion.
//!
//! Rates registered through [`Bank::add_exchange_rate`] are anchored at the
//! bank's pivot currency and stored in both directions, so any two registered
//! currencies can be converted through the pivot in at most two hops.

use std::collections::HashMap;

use money_problem_shared::{BankConfig, Currency, Money};
use tracing::{debug, warn};

use super::error::{BankError, MissingExchangeRate};
use super::exchange::ExchangeRate;

/// Immutable exchange rate table anchored at a pivot currency.
///
/// Every "mutator" returns a new bank and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    pivot_currency: Currency,
    exchange_rates: HashMap<(Currency, Currency), f64>,
}

/// Conversion route chosen for a pair of currencies.
#[derive(Debug, Clone, Copy)]
enum Route {
    Identity,
    Direct(ExchangeRate),
    ThroughPivot(ExchangeRate, ExchangeRate),
}

impl Bank {
    /// Creates an empty bank anchored at `pivot_currency`.
    #[must_use]
    pub fn with_pivot_currency(pivot_currency: Currency) -> Self {
        Self {
            pivot_currency,
            exchange_rates: HashMap::new(),
        }
    }

    /// Creates a bank holding the single direct rate `from -> to`.
    ///
    /// The bank is pivoted at `from` and no inverse rate is stored.
    pub fn with_exchange_rate(from: Currency, to: Currency, rate: f64) -> Result<Self, BankError> {
        Self::with_pivot_currency(from).add_direct_exchange_rate(from, to, rate)
    }

    /// Builds a bank from configuration, registering every configured rate
    /// against the configured pivot.
    pub fn from_config(config: &BankConfig) -> Result<Self, BankError> {
        config
            .exchange_rates
            .iter()
            .try_fold(Self::with_pivot_currency(config.pivot_currency), |bank, entry| {
                bank.add_exchange_rate(entry.currency, entry.rate)
            })
    }

    /// Returns the pivot currency.
    #[must_use]
    pub const fn pivot_currency(&self) -> Currency {
        self.pivot_currency
    }

    /// Returns a new bank with `pivot -> to = rate` and `to -> pivot = 1 / rate`.
    ///
    /// # Errors
    ///
    /// - [`BankError::PivotCurrency`] if `to` is the pivot currency
    /// - [`BankError::InvalidRate`] if `rate` is not strictly positive
    pub fn add_exchange_rate(&self, to: Currency, rate: f64) -> Result<Self, BankError> {
        if to == self.pivot_currency {
            warn!(currency = %to, "rejected exchange rate for the pivot currency");
            return Err(BankError::PivotCurrency);
        }
        let rate = ExchangeRate::new(self.pivot_currency, to, Self::validated_rate(rate)?);

        let mut exchange_rates = self.exchange_rates.clone();
        for stored in [rate, rate.inverse()] {
            exchange_rates.insert(stored.key(), stored.rate);
        }
        debug!(pivot = %self.pivot_currency, currency = %to, rate = rate.rate, "added exchange rate");

        Ok(Self {
            pivot_currency: self.pivot_currency,
            exchange_rates,
        })
    }

    /// Returns a new bank with the single directed rate `from -> to`.
    ///
    /// No inverse is stored.
    ///
    /// # Errors
    ///
    /// - [`BankError::SameCurrency`] if `from == to`
    /// - [`BankError::InvalidRate`] if `rate` is not strictly positive
    pub fn add_direct_exchange_rate(
        &self,
        from: Currency,
        to: Currency,
        rate: f64,
    ) -> Result<Self, BankError> {
        if from == to {
            warn!(currency = %from, "rejected exchange rate from a currency to itself");
            return Err(BankError::SameCurrency);
        }
        let rate = ExchangeRate::new(from, to, Self::validated_rate(rate)?);

        let mut exchange_rates = self.exchange_rates.clone();
        exchange_rates.insert(rate.key(), rate.rate);
        debug!(%from, %to, rate = rate.rate, "added direct exchange rate");

        Ok(Self {
            pivot_currency: self.pivot_currency,
            exchange_rates,
        })
    }

    /// Returns the stored rate for `from -> to`, if any.
    #[must_use]
    pub fn exchange_rate(&self, from: Currency, to: Currency) -> Option<f64> {
        self.exchange_rates.get(&(from, to)).copied()
    }

    /// Returns every stored rate, ordered by `(from, to)`.
    pub fn exchange_rates(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        let mut keys: Vec<_> = self.exchange_rates.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter()
            .filter_map(move |(from, to)| self.direct(from, to))
    }

    /// Returns true if [`Bank::convert`] would succeed for this pair.
    #[must_use]
    pub fn can_convert(&self, from: Currency, to: Currency) -> bool {
        self.route(from, to).is_some()
    }

    /// Converts `money` into `to`.
    ///
    /// Tries, in order: same currency (returned unchanged), a direct rate,
    /// then `money.currency -> pivot -> to` when both legs are registered
    /// from the pivot. Amounts are multiplied without rounding.
    ///
    /// # Errors
    ///
    /// Returns [`MissingExchangeRate`] when no route exists.
    pub fn convert(&self, money: Money, to: Currency) -> Result<Money, MissingExchangeRate> {
        let Some(route) = self.route(money.currency, to) else {
            warn!(from = %money.currency, %to, "missing exchange rate");
            return Err(MissingExchangeRate {
                from: money.currency,
                to,
            });
        };

        let converted = match route {
            Route::Identity => money,
            Route::Direct(rate) => rate.apply(money),
            Route::ThroughPivot(to_pivot, from_pivot) => from_pivot.apply(to_pivot.apply(money)),
        };
        debug!(?route, %money, %converted, "converted");
        Ok(converted)
    }

    fn route(&self, from: Currency, to: Currency) -> Option<Route> {
        if from == to {
            return Some(Route::Identity);
        }
        if let Some(rate) = self.direct(from, to) {
            return Some(Route::Direct(rate));
        }
        if !self.is_reachable_from_pivot(from) || !self.is_reachable_from_pivot(to) {
            return None;
        }
        let to_pivot = self.direct(from, self.pivot_currency)?;
        let from_pivot = self.direct(self.pivot_currency, to)?;
        Some(Route::ThroughPivot(to_pivot, from_pivot))
    }

    fn is_reachable_from_pivot(&self, currency: Currency) -> bool {
        self.exchange_rates
            .contains_key(&(self.pivot_currency, currency))
    }

    fn direct(&self, from: Currency, to: Currency) -> Option<ExchangeRate> {
        self.exchange_rate(from, to)
            .map(|rate| ExchangeRate::new(from, to, rate))
    }

    fn validated_rate(rate: f64) -> Result<f64, BankError> {
        // the inverse must be storable too
        if rate.is_finite() && rate > 0.0 && (1.0 / rate).is_finite() {
            Ok(rate)
        } else {
            warn!(rate, "rejected exchange rate without a finite positive inverse");
            Err(BankError::InvalidRate)
        }
    }
}
