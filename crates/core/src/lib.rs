//! AuditRisk Core - Domain types
//!
//! This crate contains the fundamental types of the audit risk model:
//! - `RiskFraction`: Decimal probability bounded to [0.01, 1.00]
//! - `AuditRiskLevel`: The acceptable audit risk target (5% or 10%)
//! - `RiskInputs`: The three user-selected inputs of the model

pub mod audit_level;
pub mod fraction;
pub mod inputs;
pub mod percent;

pub use audit_level::{AuditRiskError, AuditRiskLevel};
pub use fraction::{FractionError, RiskFraction};
pub use inputs::RiskInputs;
pub use percent::format_percentage;
