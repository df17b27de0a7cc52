//! Assessment snapshot
//!
//! Everything a front-end needs to render the calculator for one set of
//! inputs. Built by `RiskModel::assess`; holds no state of its own.

use auditrisk_core::{format_percentage, RiskFraction, RiskInputs};
use serde::Serialize;

use crate::band::{BandThresholds, Classification, ScaleKind};
use crate::calculator::DerivedRisk;

/// The audit risk model, as shown under the calculator
pub const FORMULA: &str = "Audit Risk = Inherent Risk × Control Risk × Detection Risk";

/// One classified value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskReading {
    pub label: &'static str,
    pub value: RiskFraction,
    pub classification: Classification,
}

impl RiskReading {
    fn new(
        label: &'static str,
        value: RiskFraction,
        kind: ScaleKind,
        thresholds: &BandThresholds,
    ) -> Self {
        Self {
            label,
            value,
            classification: thresholds.classify_fraction(value, kind),
        }
    }

    pub fn percentage(&self) -> String {
        self.value.to_string()
    }
}

/// Full calculator state for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub inputs: RiskInputs,
    pub derived: DerivedRisk,
    pub inherent: RiskReading,
    pub control: RiskReading,
    pub detection: RiskReading,
}

impl RiskAssessment {
    pub fn new(inputs: RiskInputs, derived: DerivedRisk, thresholds: &BandThresholds) -> Self {
        Self {
            inputs,
            derived,
            inherent: RiskReading::new(
                "Inherent Risk",
                inputs.inherent_risk,
                ScaleKind::Direct,
                thresholds,
            ),
            control: RiskReading::new(
                "Control Risk",
                inputs.control_risk,
                ScaleKind::Control,
                thresholds,
            ),
            detection: RiskReading::new(
                "Detection Risk (Calculated)",
                derived.detection_risk,
                ScaleKind::Inverse,
                thresholds,
            ),
        }
    }

    /// Formula with current values, e.g. `5.0% = 50.0% × 50.0% × 20.0%`
    pub fn substituted_formula(&self) -> String {
        format!(
            "{} = {} × {} × {}",
            self.inputs.audit_risk.fraction(),
            self.inputs.inherent_risk,
            self.inputs.control_risk,
            self.derived.detection_risk,
        )
    }

    /// Audit risk the clamped detection risk actually achieves, when it
    /// differs from the target
    pub fn achieved_audit_risk(&self) -> Option<String> {
        self.derived
            .is_clamped()
            .then(|| format_percentage(self.derived.achieved_audit_risk))
    }
}
