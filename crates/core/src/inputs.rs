//! RiskInputs - The three user-selected parameters of the audit risk model

use serde::{Deserialize, Serialize};

use crate::audit_level::AuditRiskLevel;
use crate::fraction::{FractionError, RiskFraction};

/// Inputs to the audit risk model.
///
/// Defaults match a fresh calculator: 5% audit risk, 50% inherent risk,
/// 50% control risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInputs {
    pub audit_risk: AuditRiskLevel,
    pub inherent_risk: RiskFraction,
    pub control_risk: RiskFraction,
}

impl RiskInputs {
    pub fn new(
        audit_risk: AuditRiskLevel,
        inherent_risk: RiskFraction,
        control_risk: RiskFraction,
    ) -> Self {
        Self {
            audit_risk,
            inherent_risk,
            control_risk,
        }
    }

    /// Build inputs from slider positions (integer percent 1..=100)
    pub fn from_percents(
        audit_risk: AuditRiskLevel,
        inherent_percent: u8,
        control_percent: u8,
    ) -> Result<Self, FractionError> {
        Ok(Self {
            audit_risk,
            inherent_risk: RiskFraction::from_percent(inherent_percent)?,
            control_risk: RiskFraction::from_percent(control_percent)?,
        })
    }
}

impl Default for RiskInputs {
    fn default() -> Self {
        let half = RiskFraction::clamped(rust_decimal::Decimal::new(5, 1));
        Self {
            audit_risk: AuditRiskLevel::FivePercent,
            inherent_risk: half,
            control_risk: half,
        }
    }
}
