//! Assessment exporters - terminal text, JSON, Markdown

use auditrisk_model::{RiskAssessment, RiskReading, FORMULA};
use serde::Serialize;

use crate::bar::{paint, render_bar};

/// Calculator title shared by all formats
pub const TITLE: &str = "Audit Risk Model Calculator";

/// Column width for labels in the text card
const LABEL_WIDTH: usize = 30;

/// Trait for exporting an assessment to different formats
pub trait ReportExporter {
    /// Export to the target format
    fn export(&self, assessment: &RiskAssessment) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

// ============================================================================
// Text Exporter
// ============================================================================

/// Terminal card exporter
pub struct TextExporter {
    bar_width: usize,
    colored: bool,
}

impl Default for TextExporter {
    fn default() -> Self {
        Self {
            bar_width: 30,
            colored: true,
        }
    }
}

impl TextExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// Disable ANSI colors
    pub fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn push_reading(&self, output: &mut String, reading: &RiskReading, with_message: bool) {
        let classification = &reading.classification;

        output.push_str(&format!(
            "{:<width$}{:>8}\n",
            reading.label,
            reading.percentage(),
            width = LABEL_WIDTH
        ));
        output.push_str(&format!(
            "[{}]\n",
            render_bar(reading.value, self.bar_width, classification.color, self.colored)
        ));

        if with_message {
            let message = paint(
                classification.message(),
                classification.guidance.color(),
                self.colored,
            );
            output.push_str(&message);
            output.push('\n');
        }
        output.push('\n');
    }
}

impl ReportExporter for TextExporter {
    fn export(&self, assessment: &RiskAssessment) -> String {
        let mut output = String::new();

        output.push_str(TITLE);
        output.push('\n');
        output.push_str(&"=".repeat(TITLE.chars().count()));
        output.push_str("\n\n");

        output.push_str(&format!(
            "{:<width$}{:>8}\n\n",
            "Audit Risk",
            assessment.inputs.audit_risk.fraction().to_string(),
            width = LABEL_WIDTH
        ));

        // Inherent risk shows its band but no guidance
        self.push_reading(&mut output, &assessment.inherent, false);
        self.push_reading(&mut output, &assessment.control, true);
        self.push_reading(&mut output, &assessment.detection, true);

        output.push_str("Audit Risk Model Formula:\n");
        output.push_str(&format!("  {}\n", FORMULA));
        output.push_str(&format!("  {}\n", assessment.substituted_formula()));

        if let Some(achieved) = assessment.achieved_audit_risk() {
            output.push_str(&format!(
                "  Detection risk clamped to {}; achieved audit risk is {}\n",
                assessment.detection.percentage(),
                achieved
            ));
        }

        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// JSON document: the raw snapshot plus the rendered strings
#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'static str,
    #[serde(flatten)]
    assessment: &'a RiskAssessment,
    formula: &'static str,
    substituted_formula: String,
    achieved_audit_risk: Option<String>,
    control_message: &'static str,
    detection_message: &'static str,
}

/// JSON format exporter
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, assessment: &RiskAssessment) -> String {
        let report = JsonReport {
            title: TITLE,
            assessment,
            formula: FORMULA,
            substituted_formula: assessment.substituted_formula(),
            achieved_audit_risk: assessment.achieved_audit_risk(),
            control_message: assessment.control.classification.message(),
            detection_message: assessment.detection.classification.message(),
        };

        if self.pretty {
            serde_json::to_string_pretty(&report).unwrap_or_default()
        } else {
            serde_json::to_string(&report).unwrap_or_default()
        }
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown format exporter
pub struct MarkdownExporter {
    include_formula: bool,
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self {
            include_formula: true,
        }
    }
}

impl MarkdownExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_formula(mut self) -> Self {
        self.include_formula = false;
        self
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, assessment: &RiskAssessment) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", TITLE));

        output.push_str("| Risk | Value | Band | Color | Guidance |\n");
        output.push_str("| --- | --- | --- | --- | --- |\n");
        output.push_str(&format!(
            "| Audit Risk | {} | | | |\n",
            assessment.inputs.audit_risk.fraction()
        ));

        // Inherent risk carries no guidance on the calculator
        let rows = [
            (&assessment.inherent, false),
            (&assessment.control, true),
            (&assessment.detection, true),
        ];

        for (reading, with_message) in rows {
            let c = &reading.classification;
            let guidance = if with_message { c.message() } else { "" };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                reading.label,
                reading.percentage(),
                c.band,
                c.color,
                guidance
            ));
        }

        if self.include_formula {
            output.push_str("\n## Formula\n\n");
            output.push_str(&format!("**{}**\n\n", FORMULA));
            output.push_str(&format!("`{}`\n", assessment.substituted_formula()));
            if let Some(achieved) = assessment.achieved_audit_risk() {
                output.push_str(&format!(
                    "\n> Detection risk is clamped; achieved audit risk is {}.\n",
                    achieved
                ));
            }
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditrisk_core::{AuditRiskLevel, RiskInputs};
    use auditrisk_model::RiskModel;

    fn assessment(audit: AuditRiskLevel, ir: u8, cr: u8) -> RiskAssessment {
        let inputs = RiskInputs::from_percents(audit, ir, cr).unwrap();
        let mut model = RiskModel::default();
        model.set_inputs(inputs);
        model.assess()
    }

    #[test]
    fn test_text_card_default_inputs() {
        let card = TextExporter::new()
            .plain()
            .with_bar_width(10)
            .export(&assessment(AuditRiskLevel::FivePercent, 50, 50));

        assert!(card.starts_with("Audit Risk Model Calculator\n"));
        assert!(card.contains(&format!("{:<30}{:>8}", "Inherent Risk", "50.0%")));
        assert!(card.contains("[█████░░░░░]"));
        assert!(card.contains("[██░░░░░░░░]"));
        assert!(card.contains("MODERATE reliance on controls"));
        assert!(card.contains("HIGH extent of substantive testing"));
        assert!(card.contains(FORMULA));
        assert!(card.contains("5.0% = 50.0% × 50.0% × 20.0%"));
        assert!(!card.contains("clamped"));
        assert!(!card.contains('\x1b'));
    }

    #[test]
    fn test_text_card_reports_clamping() {
        let card = TextExporter::new()
            .plain()
            .export(&assessment(AuditRiskLevel::TenPercent, 1, 1));
        assert!(card.contains("Detection risk clamped to 100.0%; achieved audit risk is 0.0%"));
    }

    #[test]
    fn test_text_card_colored() {
        let card = TextExporter::new().export(&assessment(AuditRiskLevel::FivePercent, 20, 100));
        // Control risk at maximum: red "cannot rely" message
        assert!(card.contains("\x1b[31mCANNOT rely on controls"));
        // Inherent risk in the green band
        assert!(card.contains("\x1b[32m"));
    }

    #[test]
    fn test_json_export() {
        let output = JsonExporter::new()
            .compact()
            .export(&assessment(AuditRiskLevel::FivePercent, 50, 50));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["title"], TITLE);
        assert_eq!(json["substituted_formula"], "5.0% = 50.0% × 50.0% × 20.0%");
        assert_eq!(json["detection_message"], "HIGH extent of substantive testing");
        assert_eq!(json["inputs"]["audit_risk"], "5%");
        assert!(json["achieved_audit_risk"].is_null());
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_markdown_export() {
        let output = MarkdownExporter::new().export(&assessment(AuditRiskLevel::TenPercent, 80, 40));
        assert!(output.starts_with("# Audit Risk Model Calculator"));
        assert!(output.contains("| Inherent Risk | 80.0% | HIGH | red |  |"));
        assert!(output.contains("| Control Risk | 40.0% | MODERATE | yellow | MODERATE reliance"));
        // 10% / 32% = 31.25%: moderate testing
        assert!(output.contains("| Detection Risk (Calculated) | 31.3% | MODERATE | yellow |"));
        assert!(output.contains("## Formula"));

        let bare = MarkdownExporter::new()
            .without_formula()
            .export(&assessment(AuditRiskLevel::TenPercent, 80, 40));
        assert!(!bare.contains("## Formula"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(TextExporter::new().extension(), "txt");
        assert_eq!(JsonExporter::new().extension(), "json");
        assert_eq!(MarkdownExporter::new().extension(), "md");
    }
}
