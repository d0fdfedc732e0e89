//! Tolerance policy for approximate amount comparison.

use serde::{Deserialize, Serialize};

/// How far apart two amounts may be and still count as equal.
///
/// Round-tripping an amount through the rate table accumulates floating-point
/// error, so consistency checks compare with a tolerance rather than `==`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// Maximum difference as a fraction of the larger magnitude.
    Relative(f64),
    /// Maximum absolute difference.
    Absolute(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Relative(0.001)
    }
}

impl Tolerance {
    /// Returns true if `actual` is within this tolerance of `expected`.
    #[must_use]
    pub fn accepts(self, expected: f64, actual: f64) -> bool {
        let delta = (expected - actual).abs();
        match self {
            Self::Relative(fraction) => delta <= fraction * expected.abs().max(actual.abs()),
            Self::Absolute(epsilon) => delta <= epsilon,
        }
    }
}
