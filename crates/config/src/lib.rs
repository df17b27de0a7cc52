//! AuditRisk Config - Configuration management
//!
//! TOML file with serde defaults for every field; a missing file means
//! the built-in calculator defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, MAX_BAR_WIDTH};
pub use types::{AuditRiskConfig, DefaultsConfig, DisplayConfig, OutputFormat, ThresholdsConfig};
