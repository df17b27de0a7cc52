//! AuditRiskLevel - The acceptable audit risk target
//!
//! Audit risk is not a free input: the auditor picks one of a small set of
//! conventional targets. Parsing accepts percent ("5%", "5") and fraction
//! ("0.05") notations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::fraction::RiskFraction;

/// Errors that can occur when parsing an audit risk target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditRiskError {
    #[error("Empty audit risk")]
    Empty,

    #[error("Invalid audit risk format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported audit risk (expected 5% or 10%): {0}")]
    Unsupported(String),
}

/// Acceptable audit risk target
///
/// # Examples
/// ```
/// use auditrisk_core::AuditRiskLevel;
///
/// let five: AuditRiskLevel = "5%".parse().unwrap();
/// assert_eq!(five, AuditRiskLevel::FivePercent);
///
/// let ten: AuditRiskLevel = "0.10".parse().unwrap();
/// assert_eq!(ten.to_string(), "10%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AuditRiskLevel {
    /// 5% - the conventional default
    #[default]
    FivePercent,
    /// 10%
    TenPercent,
}

impl AuditRiskLevel {
    /// Every selectable target, in display order
    pub const ALL: [AuditRiskLevel; 2] = [AuditRiskLevel::FivePercent, AuditRiskLevel::TenPercent];

    /// Target as a fraction
    pub fn fraction(&self) -> RiskFraction {
        RiskFraction::clamped(self.value())
    }

    /// Target as a raw Decimal (0.05 or 0.10)
    pub fn value(&self) -> Decimal {
        match self {
            AuditRiskLevel::FivePercent => dec!(0.05),
            AuditRiskLevel::TenPercent => dec!(0.10),
        }
    }

    /// Integer percent label used by the CLI
    pub fn percent(&self) -> u8 {
        match self {
            AuditRiskLevel::FivePercent => 5,
            AuditRiskLevel::TenPercent => 10,
        }
    }

    /// Map an integer percent onto a target
    pub fn from_percent(percent: u8) -> Result<Self, AuditRiskError> {
        match percent {
            5 => Ok(AuditRiskLevel::FivePercent),
            10 => Ok(AuditRiskLevel::TenPercent),
            other => Err(AuditRiskError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for AuditRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for AuditRiskLevel {
    type Err = AuditRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(AuditRiskError::Empty);
        }

        let (number, is_percent) = match raw.strip_suffix('%') {
            Some(stripped) => (stripped.trim(), true),
            None => (raw, false),
        };

        let parsed = Decimal::from_str(number)
            .map_err(|_| AuditRiskError::InvalidFormat(raw.to_string()))?;

        // Bare numbers >= 1 are read as percent ("5" means 5%)
        let fraction = if is_percent || parsed >= Decimal::ONE {
            parsed / Decimal::ONE_HUNDRED
        } else {
            parsed
        };

        AuditRiskLevel::ALL
            .into_iter()
            .find(|level| level.value() == fraction)
            .ok_or_else(|| AuditRiskError::Unsupported(raw.to_string()))
    }
}

impl TryFrom<String> for AuditRiskLevel {
    type Error = AuditRiskError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AuditRiskLevel> for String {
    fn from(level: AuditRiskLevel) -> Self {
        level.to_string()
    }
}
