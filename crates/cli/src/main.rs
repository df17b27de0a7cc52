//! AuditRisk CLI - Audit risk model calculator
//!
//! Usage:
//! ```bash
//! auditrisk calc --audit-risk 5% --inherent 50 --control 50
//! auditrisk calc -a 10 -i 80 -c 40 --format json
//! auditrisk session
//! auditrisk bands --no-color
//! ```

use anyhow::{Context, Result};
use auditrisk_config::{AuditRiskConfig, ConfigLoader, OutputFormat};
use auditrisk_core::AuditRiskLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod settings;

use commands::{bands, calc, session};
use settings::Settings;

/// AuditRisk - Detection risk from the audit risk model
#[derive(Parser)]
#[command(name = "auditrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short = 'C', env = "AUDITRISK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute detection risk for one set of inputs
    Calc {
        /// Audit risk target (5% or 10%)
        #[arg(long, short = 'a')]
        audit_risk: Option<AuditRiskLevel>,
        /// Inherent risk, percent
        #[arg(long, short = 'i', value_parser = clap::value_parser!(u8).range(1..=100))]
        inherent: Option<u8>,
        /// Control risk, percent
        #[arg(long, short = 'c', value_parser = clap::value_parser!(u8).range(1..=100))]
        control: Option<u8>,
        /// Output format
        #[arg(long, short = 'f')]
        format: Option<FormatArg>,
        /// Bar width in cells
        #[arg(long)]
        bar_width: Option<usize>,
    },

    /// Interactive session: change inputs line by line and watch the result
    Session {
        /// Bar width in cells
        #[arg(long)]
        bar_width: Option<usize>,
    },

    /// Show the band thresholds and the guidance for each band
    Bands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Markdown,
}

impl FormatArg {
    pub fn to_output_format(&self) -> OutputFormat {
        match self {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

/// Filter directives: RUST_LOG, then --log-level, then the config file
fn effective_log_level(rust_log: Option<String>, cli: &Cli, config: &AuditRiskConfig) -> String {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .or_else(|| cli.log_level.clone())
        .unwrap_or_else(|| config.log_level.clone())
}

fn init_tracing(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::load_optional(cli.config.as_deref())
        .with_context(|| format!("Failed to load configuration {:?}", cli.config))?;

    let level = effective_log_level(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &cli,
        loader.get(),
    );
    init_tracing(&level);

    if let Some(path) = loader.path() {
        tracing::info!(path = %path.display(), "Configuration loaded");
    }

    let settings = Settings::from_config(loader.into_config())?.no_color(cli.no_color);

    match cli.command {
        Commands::Calc {
            audit_risk,
            inherent,
            control,
            format,
            bar_width,
        } => {
            let settings = settings
                .format(format.map(|f| f.to_output_format()))
                .bar_width(bar_width)?;
            calc::run(&settings, audit_risk, inherent, control)?;
        }

        Commands::Session { bar_width } => {
            let settings = settings.bar_width(bar_width)?;
            session::run_stdio(&settings)?;
        }

        Commands::Bands => {
            bands::run(&settings);
        }
    }

    Ok(())
}
