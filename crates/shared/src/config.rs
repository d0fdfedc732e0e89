//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{Currency, Tolerance};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Tolerance used when comparing round-tripped amounts.
    #[serde(default)]
    pub tolerance: Tolerance,
}

/// Bank configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Currency every pivot-anchored rate is expressed against.
    #[serde(default = "default_pivot_currency")]
    pub pivot_currency: Currency,
    /// Rates from the pivot currency to other currencies.
    #[serde(default)]
    pub exchange_rates: Vec<ExchangeRateConfig>,
}

fn default_pivot_currency() -> Currency {
    Currency::Eur
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            pivot_currency: default_pivot_currency(),
            exchange_rates: Vec::new(),
        }
    }
}

/// A single pivot-anchored exchange rate (1 pivot = `rate` currency).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ExchangeRateConfig {
    /// Target currency.
    pub currency: Currency,
    /// Exchange rate from the pivot currency.
    pub rate: f64,
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}` and `MONEY_PROBLEM__*` variables.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONEY_PROBLEM").separator("__"))
            .build()?;

        Self::validated(config.try_deserialize()?)
    }

    /// Parses configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Self::validated(config.try_deserialize()?)
    }

    fn validated(self) -> AppResult<Self> {
        let bound = match self.tolerance {
            Tolerance::Relative(value) | Tolerance::Absolute(value) => value,
        };
        if !bound.is_finite() || bound < 0.0 {
            return Err(AppError::Validation(format!(
                "tolerance must be a finite, non-negative number, got {bound}"
            )));
        }
        Ok(self)
    }
}
