//! Property-based tests for Portfolio.
//!
//! - Evaluation in a single currency is a plain sum
//! - Every failing entry is reported, in entry order
//! - Evaluation is deterministic and never changes its inputs

use money_problem_shared::{Currency, Money};
use proptest::prelude::*;

use super::service::Portfolio;
use crate::bank::{Bank, MissingExchangeRate};

/// Strategy to generate amounts within ±1,000,000,000.
fn amount() -> impl Strategy<Value = f64> {
    -1_000_000_000.0..=1_000_000_000.0
}

/// Strategy to generate currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::all().to_vec())
}

/// Strategy to generate a list of money in any currency.
fn moneys() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(
        (amount(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency)),
        0..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With no rates at all, entries already in the target currency sum up
    /// and every other entry is reported as missing.
    #[test]
    fn prop_empty_bank_reports_every_foreign_entry(
        moneys in moneys(),
        to in currency(),
    ) {
        let bank = Bank::with_pivot_currency(Currency::Eur);
        let portfolio: Portfolio = moneys.iter().copied().collect();

        let expected: Vec<_> = moneys
            .iter()
            .filter(|money| money.currency != to)
            .map(|money| MissingExchangeRate { from: money.currency, to })
            .collect();

        match portfolio.evaluate(&bank, to) {
            Ok(total) => {
                prop_assert!(expected.is_empty());
                let sum = moneys.iter().fold(0.0, |sum, money| sum + money.amount);
                prop_assert_eq!(total, Money::new(sum, to));
            }
            Err(err) => {
                prop_assert_eq!(err.failures(), expected.as_slice());
            }
        }
    }

    /// Same portfolio, same bank, same result.
    #[test]
    fn prop_evaluate_is_deterministic(
        moneys in moneys(),
        to in currency(),
    ) {
        let bank = Bank::with_pivot_currency(Currency::Eur)
            .add_exchange_rate(Currency::Usd, 1.2)
            .and_then(|bank| bank.add_exchange_rate(Currency::Krw, 1344.0))
            .unwrap();
        let portfolio: Portfolio = moneys.into_iter().collect();
        let snapshot = portfolio.clone();

        let first = portfolio.evaluate(&bank, to);
        let second = portfolio.evaluate(&bank, to);

        prop_assert_eq!(first, second);
        prop_assert_eq!(portfolio, snapshot);
    }

    /// Adding an entry never changes the portfolio it was called on.
    #[test]
    fn prop_add_is_pure(
        moneys in moneys(),
        amount in amount(),
        currency in currency(),
    ) {
        let portfolio: Portfolio = moneys.into_iter().collect();
        let snapshot = portfolio.clone();

        let extended = portfolio.add(Money::new(amount, currency));

        prop_assert_eq!(extended.len(), portfolio.len() + 1);
        prop_assert_eq!(portfolio, snapshot);
    }
}
