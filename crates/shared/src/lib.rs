//! Shared types, errors, and configuration for the Money Problem.
//!
//! This crate provides common types used across the workspace:
//! - Money and currency value types
//! - Tolerance policy for approximate amount comparison
//! - Workspace-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, BankConfig, ExchangeRateConfig};
pub use crate::error::{AppError, AppResult};
pub use types::{Currency, Money, Tolerance};
