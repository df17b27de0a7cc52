//! # AuditRisk Reports
//!
//! Renders a [`RiskAssessment`](auditrisk_model::RiskAssessment) for people
//! and for other programs.
//!
//! ## Exporters
//!
//! - [`TextExporter`] - Terminal card with proportional, colored bars
//! - [`JsonExporter`] - JSON snapshot (pretty or compact)
//! - [`MarkdownExporter`] - Markdown table for working papers
//!
//! ## Example
//!
//! ```rust
//! use auditrisk_model::RiskModel;
//! use auditrisk_reports::{ReportExporter, TextExporter};
//!
//! let assessment = RiskModel::default().assess();
//! let card = TextExporter::new().plain().export(&assessment);
//! assert!(card.contains("5.0% = 50.0% × 50.0% × 20.0%"));
//! ```

pub mod bar;
pub mod exporters;
pub mod legend;

pub use bar::{paint, render_bar};
pub use exporters::{JsonExporter, MarkdownExporter, ReportExporter, TextExporter};
pub use legend::{legend, render_legend, LegendRow, LegendSection};
