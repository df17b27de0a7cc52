//! Detection risk calculation
//!
//! DR = AR / (IR × CR), with IR and CR floored at 1% before dividing and the
//! result clamped to [0.01, 1.00]. Pure and deterministic.

use auditrisk_core::{RiskFraction, RiskInputs};
use rust_decimal::Decimal;
use serde::Serialize;

/// Detection risk derived from a set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedRisk {
    /// Clamped detection risk, the value shown to the auditor
    pub detection_risk: RiskFraction,

    /// AR / (IR × CR) before clamping (saturates at Decimal::MAX)
    pub unclamped: Decimal,

    /// IR × CR × DR: the audit risk the clamped result actually delivers
    pub achieved_audit_risk: Decimal,
}

impl DerivedRisk {
    /// True when the raw quotient fell outside [0.01, 1.00]
    pub fn is_clamped(&self) -> bool {
        self.unclamped != self.detection_risk.value()
    }
}

/// Compute detection risk from raw fractions.
///
/// Inherent and control risk are floored at 0.01 (and capped at 1.00), so
/// zero or negative inputs never reach the division.
///
/// ```
/// use auditrisk_model::compute_detection_risk;
/// use rust_decimal_macros::dec;
///
/// let dr = compute_detection_risk(dec!(0.05), dec!(0.5), dec!(0.5));
/// assert_eq!(dr.value(), dec!(0.20));
/// ```
pub fn compute_detection_risk(
    audit_risk: Decimal,
    inherent_risk: Decimal,
    control_risk: Decimal,
) -> RiskFraction {
    let inherent = RiskFraction::clamped(inherent_risk);
    let control = RiskFraction::clamped(control_risk);

    if inherent.value() != inherent_risk || control.value() != control_risk {
        tracing::warn!(
            %inherent_risk,
            %control_risk,
            "Input outside [0.01, 1.00], clamped before dividing"
        );
    }

    RiskFraction::clamped(quotient(audit_risk, inherent, control))
}

/// Derive detection risk for a full set of inputs.
pub fn derive(inputs: &RiskInputs) -> DerivedRisk {
    let audit = inputs.audit_risk.value();
    let unclamped = quotient(audit, inputs.inherent_risk, inputs.control_risk);
    let detection_risk = RiskFraction::clamped(unclamped);

    let achieved_audit_risk =
        inputs.inherent_risk.value() * inputs.control_risk.value() * detection_risk.value();

    let derived = DerivedRisk {
        detection_risk,
        unclamped,
        achieved_audit_risk,
    };

    if derived.is_clamped() {
        tracing::warn!(
            audit_risk = %inputs.audit_risk,
            inherent_risk = %inputs.inherent_risk,
            control_risk = %inputs.control_risk,
            %unclamped,
            detection_risk = %detection_risk,
            "Detection risk clamped; formula does not balance"
        );
    }

    tracing::debug!(
        audit_risk = %inputs.audit_risk,
        inherent_risk = %inputs.inherent_risk,
        control_risk = %inputs.control_risk,
        detection_risk = %detection_risk,
        "Detection risk recomputed"
    );

    derived
}

fn quotient(audit_risk: Decimal, inherent: RiskFraction, control: RiskFraction) -> Decimal {
    // Divisor >= 0.0001, so only an absurd audit risk can overflow
    let divisor = inherent.value() * control.value();
    audit_risk.checked_div(divisor).unwrap_or(if audit_risk.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditrisk_core::AuditRiskLevel;
    use rust_decimal_macros::dec;

    fn inputs(audit: AuditRiskLevel, ir: u8, cr: u8) -> RiskInputs {
        RiskInputs::from_percents(audit, ir, cr).unwrap()
    }

    #[test]
    fn test_midpoint_inputs() {
        assert_eq!(
            compute_detection_risk(dec!(0.05), dec!(0.5), dec!(0.5)).value(),
            dec!(0.20)
        );
    }

    #[test]
    fn test_maximum_inherent_and_control() {
        assert_eq!(
            compute_detection_risk(dec!(0.05), dec!(1), dec!(1)).value(),
            dec!(0.05)
        );
    }

    #[test]
    fn test_minimum_inputs_clamp_to_one() {
        let dr = compute_detection_risk(dec!(0.10), dec!(0.01), dec!(0.01));
        assert_eq!(dr, RiskFraction::MAX);
    }

    #[test]
    fn test_zero_inputs_guarded() {
        // Zero is floored to 0.01 rather than dividing by zero
        let dr = compute_detection_risk(dec!(0.05), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(dr, RiskFraction::MAX);

        let dr = compute_detection_risk(dec!(0.05), dec!(-1), dec!(0.5));
        assert_eq!(dr, RiskFraction::MAX);
    }

    #[test]
    fn test_result_floored_at_one_percent() {
        let dr = compute_detection_risk(dec!(0.001), dec!(1), dec!(1));
        assert_eq!(dr, RiskFraction::MIN);

        let dr = compute_detection_risk(Decimal::ZERO, dec!(1), dec!(1));
        assert_eq!(dr, RiskFraction::MIN);
    }

    #[test]
    fn test_overflowing_audit_risk_saturates() {
        let dr = compute_detection_risk(Decimal::MAX, dec!(0.01), dec!(0.01));
        assert_eq!(dr, RiskFraction::MAX);
    }

    #[test]
    fn test_derive_balanced() {
        let derived = derive(&inputs(AuditRiskLevel::FivePercent, 50, 50));
        assert_eq!(derived.detection_risk.value(), dec!(0.2));
        assert!(!derived.is_clamped());
        assert_eq!(derived.achieved_audit_risk, dec!(0.05));
    }

    #[test]
    fn test_derive_clamped_reports_shortfall() {
        let derived = derive(&inputs(AuditRiskLevel::TenPercent, 1, 1));
        assert!(derived.is_clamped());
        assert_eq!(derived.unclamped, dec!(1000));
        assert_eq!(derived.detection_risk, RiskFraction::MAX);
        // 1% × 1% × 100% = 0.01%, far below the 10% target
        assert_eq!(derived.achieved_audit_risk, dec!(0.0001));
    }

    #[test]
    fn test_derive_matches_compute() {
        let i = inputs(AuditRiskLevel::TenPercent, 70, 35);
        let derived = derive(&i);
        let direct = compute_detection_risk(
            i.audit_risk.value(),
            i.inherent_risk.value(),
            i.control_risk.value(),
        );
        assert_eq!(derived.detection_risk, direct);
    }
}
