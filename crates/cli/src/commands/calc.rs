//! One-shot calculation

use anyhow::Result;
use auditrisk_core::{AuditRiskLevel, RiskFraction};
use auditrisk_model::InputChange;
use std::io::Write;

use crate::settings::Settings;

/// Compute and print one assessment
pub fn run(
    settings: &Settings,
    audit_risk: Option<AuditRiskLevel>,
    inherent: Option<u8>,
    control: Option<u8>,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(settings, audit_risk, inherent, control, &mut out)
}

/// Apply the flags over the configured inputs and write the report
pub fn render<W: Write>(
    settings: &Settings,
    audit_risk: Option<AuditRiskLevel>,
    inherent: Option<u8>,
    control: Option<u8>,
    out: &mut W,
) -> Result<()> {
    let mut model = settings.model();

    if let Some(level) = audit_risk {
        model.apply(InputChange::AuditRisk(level));
    }
    if let Some(percent) = inherent {
        model.apply(InputChange::InherentRisk(RiskFraction::from_percent(percent)?));
    }
    if let Some(percent) = control {
        model.apply(InputChange::ControlRisk(RiskFraction::from_percent(percent)?));
    }

    let report = settings.exporter().export(&model.assess());
    writeln!(out, "{}", report.trim_end())?;
    Ok(())
}
