//! Core business logic for the Money Problem.
//!
//! This crate contains pure value logic with no I/O.
//!
//! # Modules
//!
//! - `bank` - Exchange rates and currency conversion through a pivot currency
//! - `portfolio` - Aggregation of money across currencies

pub mod bank;
pub mod portfolio;

pub use bank::{Bank, BankError, ExchangeRate, MissingExchangeRate};
pub use portfolio::{ConversionOutcome, MissingExchangeRates, Portfolio};
