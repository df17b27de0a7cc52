//! Effective settings: configuration file merged with command-line flags

use anyhow::{bail, Result};
use auditrisk_config::{AuditRiskConfig, OutputFormat, MAX_BAR_WIDTH};
use auditrisk_core::RiskInputs;
use auditrisk_model::{BandThresholds, RiskModel};
use auditrisk_reports::{JsonExporter, MarkdownExporter, ReportExporter, TextExporter};
use std::io::IsTerminal;

#[derive(Debug, Clone)]
pub struct Settings {
    pub inputs: RiskInputs,
    pub thresholds: BandThresholds,
    pub format: OutputFormat,
    pub bar_width: usize,
    pub colored: bool,
}

impl Settings {
    pub fn from_config(config: AuditRiskConfig) -> Result<Self> {
        Ok(Self {
            inputs: config.defaults.inputs(),
            thresholds: config.thresholds.to_thresholds()?,
            format: config.display.format,
            bar_width: config.display.bar_width,
            colored: config.display.color,
        })
    }

    /// Colors only reach a terminal, and only when not disabled
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.colored = self.colored && !no_color && std::io::stdout().is_terminal();
        self
    }

    pub fn format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn bar_width(mut self, bar_width: Option<usize>) -> Result<Self> {
        if let Some(width) = bar_width {
            if width == 0 || width > MAX_BAR_WIDTH {
                bail!("--bar-width must be between 1 and {}, got {}", MAX_BAR_WIDTH, width);
            }
            self.bar_width = width;
        }
        Ok(self)
    }

    /// Fresh session starting from the configured inputs
    pub fn model(&self) -> RiskModel {
        RiskModel::new(self.inputs, self.thresholds)
    }

    pub fn exporter(&self) -> Box<dyn ReportExporter> {
        match self.format {
            OutputFormat::Text => Box::new(
                TextExporter::new()
                    .with_bar_width(self.bar_width)
                    .colored(self.colored),
            ),
            OutputFormat::Json => Box::new(JsonExporter::new()),
            OutputFormat::Markdown => Box::new(MarkdownExporter::new()),
        }
    }
}
