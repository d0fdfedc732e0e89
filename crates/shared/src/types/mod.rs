//! Common types used across the workspace.

pub mod money;
pub mod tolerance;

pub use money::{Currency, Money};
pub use tolerance::Tolerance;
