//! Property-based tests for Bank.
//!
//! - Identity conversion
//! - Round-tripping through the pivot currency
//! - Rate rejection
//! - Immutability of the receiver

use money_problem_shared::{Currency, Money, Tolerance};
use proptest::prelude::*;

use super::error::BankError;
use super::service::Bank;

/// Largest amount generated, in either direction.
const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Strategy to generate amounts within the documented domain bound.
fn amount() -> impl Strategy<Value = f64> {
    -MAX_AMOUNT..=MAX_AMOUNT
}

/// Strategy to generate currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::all().to_vec())
}

/// Strategy to generate money.
fn money() -> impl Strategy<Value = Money> {
    (amount(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

/// Strategy to generate positive exchange rates (0.001 to 10000.000).
fn positive_rate() -> impl Strategy<Value = f64> {
    (1u32..=10_000_000u32).prop_map(|v| f64::from(v) / 1000.0)
}

/// Strategy to generate rates that must be rejected.
fn non_positive_rate() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -MAX_AMOUNT..0.0]
}

/// Bank pivoted at `pivot` with a rate to every other currency.
fn fully_connected_bank(pivot: Currency, rates: &[f64]) -> Bank {
    Currency::all()
        .into_iter()
        .filter(|currency| *currency != pivot)
        .zip(rates)
        .try_fold(Bank::with_pivot_currency(pivot), |bank, (currency, rate)| {
            bank.add_exchange_rate(currency, *rate)
        })
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting into the money's own currency returns it unchanged.
    #[test]
    fn prop_identity_conversion(
        money in money(),
        pivot in currency(),
        rates in prop::collection::vec(positive_rate(), 2),
    ) {
        let empty = Bank::with_pivot_currency(pivot);
        prop_assert_eq!(empty.convert(money, money.currency), Ok(money));

        let bank = fully_connected_bank(pivot, &rates);
        prop_assert_eq!(bank.convert(money, money.currency), Ok(money));
    }

    /// Converting there and back lands within the configured tolerance.
    #[test]
    fn prop_round_trip_within_tolerance(
        money in money(),
        to in currency(),
        pivot in currency(),
        rates in prop::collection::vec(positive_rate(), 2),
    ) {
        let bank = fully_connected_bank(pivot, &rates);

        let there = bank.convert(money, to).unwrap();
        let back = bank.convert(there, money.currency).unwrap();

        prop_assert!(
            back.is_close_to(&money, Tolerance::default()),
            "{} round-tripped through {} came back as {}",
            money, to, back
        );
    }

    /// The pivot currency can never receive a pivot-anchored rate.
    #[test]
    fn prop_pivot_rate_always_rejected(
        pivot in currency(),
        rate in any::<f64>(),
    ) {
        let bank = Bank::with_pivot_currency(pivot);
        prop_assert_eq!(bank.add_exchange_rate(pivot, rate), Err(BankError::PivotCurrency));
    }

    /// Zero and negative rates are always rejected.
    #[test]
    fn prop_non_positive_rate_always_rejected(
        pivot in currency(),
        to in currency(),
        rate in non_positive_rate(),
    ) {
        prop_assume!(pivot != to);
        let bank = Bank::with_pivot_currency(pivot);
        prop_assert_eq!(bank.add_exchange_rate(to, rate), Err(BankError::InvalidRate));
    }

    /// Adding a rate never changes the bank it was called on.
    #[test]
    fn prop_add_exchange_rate_is_pure(
        pivot in currency(),
        to in currency(),
        rate in positive_rate(),
        rates in prop::collection::vec(positive_rate(), 2),
    ) {
        let bank = fully_connected_bank(pivot, &rates);
        let snapshot = bank.clone();

        let _ = bank.add_exchange_rate(to, rate);

        prop_assert_eq!(bank, snapshot);
    }
}
