//! Configuration loader

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::AuditRiskConfig;

/// Widest bar the text card will draw
pub const MAX_BAR_WIDTH: usize = 200;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration loader
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AuditRiskConfig,

    /// Path the configuration was read from, if any
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create loader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: AuditRiskConfig = toml::from_str(&content)?;

        Self::validate(&config)?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: AuditRiskConfig = toml::from_str(content)?;
        Self::validate(&config)?;

        Ok(Self {
            config,
            config_path: None,
        })
    }

    /// Load from `path` when given, otherwise fall back to defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Current configuration
    #[inline]
    pub fn get(&self) -> &AuditRiskConfig {
        &self.config
    }

    /// Take ownership of the configuration
    pub fn into_config(self) -> AuditRiskConfig {
        self.config
    }

    /// Source file, if loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Validate configuration
    fn validate(config: &AuditRiskConfig) -> Result<(), ConfigError> {
        config
            .thresholds
            .to_thresholds()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let width = config.display.bar_width;
        if width == 0 || width > MAX_BAR_WIDTH {
            return Err(ConfigError::Validation(format!(
                "bar_width must be between 1 and {}, got {}",
                MAX_BAR_WIDTH, width
            )));
        }

        Ok(())
    }
}
