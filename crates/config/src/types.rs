//! Configuration types

use auditrisk_core::{AuditRiskLevel, RiskFraction, RiskInputs};
use auditrisk_model::{BandThresholds, ModelError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRiskConfig {
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Starting inputs for a new calculation
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Band cut points
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Output options
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AuditRiskConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            defaults: DefaultsConfig::default(),
            thresholds: ThresholdsConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Starting inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Audit risk target ("5%" or "10%")
    #[serde(default)]
    pub audit_risk: AuditRiskLevel,

    /// Inherent risk fraction
    #[serde(default = "default_half")]
    pub inherent_risk: RiskFraction,

    /// Control risk fraction
    #[serde(default = "default_half")]
    pub control_risk: RiskFraction,
}

fn default_half() -> RiskFraction {
    RiskFraction::clamped(Decimal::new(5, 1))
}

impl DefaultsConfig {
    /// Inputs a session starts from
    pub fn inputs(&self) -> RiskInputs {
        RiskInputs::new(self.audit_risk, self.inherent_risk, self.control_risk)
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let inputs = RiskInputs::default();
        Self {
            audit_risk: inputs.audit_risk,
            inherent_risk: inputs.inherent_risk,
            control_risk: inputs.control_risk,
        }
    }
}

/// Band cut points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Values below are LOW
    #[serde(default = "default_moderate")]
    pub moderate: Decimal,

    /// Values below are MODERATE
    #[serde(default = "default_high")]
    pub high: Decimal,

    /// Control risk at or above cannot be relied on
    #[serde(default = "default_maximum")]
    pub maximum: Decimal,
}

fn default_moderate() -> Decimal {
    BandThresholds::DEFAULT_MODERATE
}

fn default_high() -> Decimal {
    BandThresholds::DEFAULT_HIGH
}

fn default_maximum() -> Decimal {
    BandThresholds::DEFAULT_MAXIMUM
}

impl ThresholdsConfig {
    /// Validated thresholds for the model
    pub fn to_thresholds(&self) -> Result<BandThresholds, ModelError> {
        BandThresholds::new(self.moderate, self.high, self.maximum)
    }
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            moderate: default_moderate(),
            high: default_high(),
            maximum: default_maximum(),
        }
    }
}

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Bar width in cells
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Emit ANSI colors in text output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_bar_width() -> usize {
    30
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            color: true,
            format: OutputFormat::default(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Terminal card (default)
    #[default]
    Text,
    /// Pretty-printed JSON snapshot
    Json,
    /// Markdown table
    Markdown,
}
