//! Model errors

use auditrisk_core::{AuditRiskError, FractionError};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid band thresholds: moderate {moderate}, high {high}, maximum {maximum} (need 0 < moderate < high <= maximum <= 1)")]
    InvalidThresholds {
        moderate: Decimal,
        high: Decimal,
        maximum: Decimal,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing value for command: {0}")]
    MissingValue(String),

    #[error("Invalid percent: {0}")]
    InvalidPercent(String),

    #[error("Unexpected argument for {command}: {argument}")]
    UnexpectedArgument { command: String, argument: String },

    #[error(transparent)]
    Fraction(#[from] FractionError),

    #[error(transparent)]
    AuditRisk(#[from] AuditRiskError),
}
