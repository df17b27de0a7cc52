//! Risk model session

use auditrisk_core::{AuditRiskLevel, RiskFraction, RiskInputs};

use crate::assessment::RiskAssessment;
use crate::band::BandThresholds;
use crate::calculator::{derive, DerivedRisk};
use crate::command::InputChange;

/// Risk Model - one calculator session
///
/// Holds the three inputs and the detection risk derived from them.
/// Every setter recomputes, so the derived value can never go stale.
#[derive(Debug, Clone)]
pub struct RiskModel {
    inputs: RiskInputs,
    thresholds: BandThresholds,
    derived: DerivedRisk,
}

impl RiskModel {
    /// Create a session with the given starting inputs
    pub fn new(inputs: RiskInputs, thresholds: BandThresholds) -> Self {
        Self {
            inputs,
            thresholds,
            derived: derive(&inputs),
        }
    }

    pub fn inputs(&self) -> &RiskInputs {
        &self.inputs
    }

    pub fn derived(&self) -> &DerivedRisk {
        &self.derived
    }

    pub fn detection_risk(&self) -> RiskFraction {
        self.derived.detection_risk
    }

    pub fn set_audit_risk(&mut self, level: AuditRiskLevel) {
        self.inputs.audit_risk = level;
        self.recompute();
    }

    pub fn set_inherent_risk(&mut self, value: RiskFraction) {
        self.inputs.inherent_risk = value;
        self.recompute();
    }

    pub fn set_control_risk(&mut self, value: RiskFraction) {
        self.inputs.control_risk = value;
        self.recompute();
    }

    pub fn set_inputs(&mut self, inputs: RiskInputs) {
        self.inputs = inputs;
        self.recompute();
    }

    /// Apply a single input change
    pub fn apply(&mut self, change: InputChange) {
        match change {
            InputChange::AuditRisk(level) => self.set_audit_risk(level),
            InputChange::InherentRisk(value) => self.set_inherent_risk(value),
            InputChange::ControlRisk(value) => self.set_control_risk(value),
        }
    }

    /// Snapshot of the current state, classified for display
    pub fn assess(&self) -> RiskAssessment {
        RiskAssessment::new(self.inputs, self.derived, &self.thresholds)
    }

    fn recompute(&mut self) {
        self.derived = derive(&self.inputs);
    }
}

impl Default for RiskModel {
    fn default() -> Self {
        Self::new(RiskInputs::default(), BandThresholds::default())
    }
}
