//! RiskFraction - Bounded decimal probability
//!
//! Every risk in the model is a probability in [0.01, 1.00].
//! The lower bound keeps the detection risk formula away from division by zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::percent::format_percentage;

/// Errors that can occur when building a fraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("Risk fraction out of range [0.01, 1.00]: {0}")]
    OutOfRange(Decimal),

    #[error("Risk percent out of range [1, 100]: {0}")]
    PercentOutOfRange(u32),
}

/// A risk probability in [0.01, 1.00].
///
/// # Invariant
/// `RiskFraction::MIN <= value <= RiskFraction::MAX`. Enforced by the
/// constructors; `clamped` saturates instead of failing.
///
/// # Example
/// ```
/// use auditrisk_core::RiskFraction;
/// use rust_decimal::Decimal;
///
/// let half = RiskFraction::new(Decimal::new(5, 1)).unwrap();
/// assert_eq!(half.to_string(), "50.0%");
///
/// // Zero saturates to the floor
/// let floor = RiskFraction::clamped(Decimal::ZERO);
/// assert_eq!(floor, RiskFraction::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct RiskFraction(Decimal);

impl RiskFraction {
    /// Smallest representable risk (1%)
    pub const MIN: Self = Self(dec!(0.01));

    /// Certainty (100%)
    pub const MAX: Self = Self(dec!(1.00));

    /// Create a fraction, rejecting values outside [0.01, 1.00].
    pub fn new(value: Decimal) -> Result<Self, FractionError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            Err(FractionError::OutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a fraction, saturating to the nearest bound.
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Create a fraction from an integer percent (slider position 1..=100).
    pub fn from_percent(percent: u8) -> Result<Self, FractionError> {
        if !(1..=100).contains(&percent) {
            return Err(FractionError::PercentOutOfRange(percent.into()));
        }
        Ok(Self(Decimal::new(percent as i64, 2)))
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True at the upper bound
    #[inline]
    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }
}

impl fmt::Display for RiskFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_percentage(self.0))
    }
}

impl TryFrom<Decimal> for RiskFraction {
    type Error = FractionError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskFraction> for Decimal {
    fn from(fraction: RiskFraction) -> Self {
        fraction.0
    }
}
