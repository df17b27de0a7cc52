//! Band legend
//!
//! Every row is produced by running a representative value through the
//! classifier, so the legend cannot drift from the rules it documents.

use auditrisk_core::format_percentage;
use auditrisk_model::{BandColor, BandThresholds, ControlReliance, Guidance, ScaleKind};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::bar::paint;

/// One value range and how it is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendRow {
    pub range: String,
    pub label: String,
    pub color: BandColor,
    pub message: Option<&'static str>,
}

/// Legend for one scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendSection {
    pub kind: ScaleKind,
    pub title: &'static str,
    pub rows: Vec<LegendRow>,
}

impl LegendSection {
    /// Build the legend for `kind`
    pub fn build(kind: ScaleKind, thresholds: &BandThresholds) -> Self {
        let title = match kind {
            // The card shows no guidance for inherent risk
            ScaleKind::Direct => "Inherent Risk (direct, bar only, no guidance)",
            ScaleKind::Control => "Control Risk (control)",
            ScaleKind::Inverse => "Detection Risk (inverse)",
        };

        let mut rows = band_rows(kind, thresholds);
        if kind == ScaleKind::Control {
            rows.extend(reliance_rows(thresholds));
        }

        Self { kind, title, rows }
    }
}

/// Bar bands: `< moderate`, `moderate to < high`, `>= high`
fn band_rows(kind: ScaleKind, thresholds: &BandThresholds) -> Vec<LegendRow> {
    let moderate = format_percentage(thresholds.moderate());
    let high = format_percentage(thresholds.high());

    let ranges = [
        (format!("< {}", moderate), Decimal::ZERO),
        (format!("{} to < {}", moderate, high), thresholds.moderate()),
        (format!(">= {}", high), thresholds.high()),
    ];

    ranges
        .into_iter()
        .map(|(range, sample)| {
            let c = thresholds.classify(sample, kind);
            let message = match c.guidance {
                Guidance::SubstantiveTesting(_) => Some(c.message()),
                Guidance::Reliance(_) => None,
            };
            LegendRow {
                range,
                label: format!("{} bar", c.band),
                color: c.color,
                message,
            }
        })
        .collect()
}

/// Reliance messages: `<= moderate`, `<= high`, `< maximum`, `>= maximum`
fn reliance_rows(thresholds: &BandThresholds) -> Vec<LegendRow> {
    let moderate = format_percentage(thresholds.moderate());
    let high = format_percentage(thresholds.high());
    let maximum = format_percentage(thresholds.maximum());

    let mut ranges = vec![(format!("<= {}", moderate), thresholds.moderate())];
    if thresholds.high() < thresholds.maximum() {
        let midpoint = (thresholds.high() + thresholds.maximum()) / Decimal::TWO;
        ranges.push((format!("> {} to <= {}", moderate, high), thresholds.high()));
        ranges.push((format!("> {} to < {}", high, maximum), midpoint));
    } else {
        // high == maximum: the LOW reliance range is empty
        let midpoint = (thresholds.moderate() + thresholds.high()) / Decimal::TWO;
        ranges.push((format!("> {} to < {}", moderate, maximum), midpoint));
    }
    ranges.push((format!(">= {}", maximum), thresholds.maximum()));

    ranges
        .into_iter()
        .map(|(range, sample)| {
            let guidance = thresholds.classify(sample, ScaleKind::Control).guidance;
            let label = match guidance {
                Guidance::Reliance(ControlReliance::NoReliance) => "NO reliance".to_string(),
                Guidance::Reliance(reliance) => format!("{} reliance", reliance),
                Guidance::SubstantiveTesting(extent) => format!("{} testing", extent),
            };
            LegendRow {
                range,
                label,
                color: guidance.color(),
                message: Some(guidance.message()),
            }
        })
        .collect()
}

/// Legend for every scale, in display order
pub fn legend(thresholds: &BandThresholds) -> Vec<LegendSection> {
    ScaleKind::iter()
        .map(|kind| LegendSection::build(kind, thresholds))
        .collect()
}

/// Render the legend as text
pub fn render_legend(thresholds: &BandThresholds, colored: bool) -> String {
    let mut output = String::new();

    for section in legend(thresholds) {
        output.push_str(section.title);
        output.push('\n');
        for row in &section.rows {
            let label = paint(&format!("{:<22}", row.label), row.color, colored);
            output.push_str(&format!("  {:<22} {}", row.range, label));
            if let Some(message) = row.message {
                output.push_str(&format!(" {}", message));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_legend_has_every_scale() {
        let sections = legend(&BandThresholds::default());
        let kinds: Vec<ScaleKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![ScaleKind::Direct, ScaleKind::Control, ScaleKind::Inverse]);
    }

    #[test]
    fn test_direct_rows() {
        let section = LegendSection::build(ScaleKind::Direct, &BandThresholds::default());
        assert_eq!(section.title, "Inherent Risk (direct, bar only, no guidance)");
        assert_eq!(section.rows.len(), 3);
        assert_eq!(section.rows[0].range, "< 30.0%");
        assert_eq!(section.rows[0].color, BandColor::Green);
        assert_eq!(section.rows[1].range, "30.0% to < 60.0%");
        assert_eq!(section.rows[2].label, "HIGH bar");
        assert!(section.rows.iter().all(|r| r.message.is_none()));
    }

    #[test]
    fn test_control_rows_include_reliance() {
        let section = LegendSection::build(ScaleKind::Control, &BandThresholds::default());
        assert_eq!(section.rows.len(), 7);

        let reliance = &section.rows[3..];
        assert_eq!(reliance[0].range, "<= 30.0%");
        assert_eq!(reliance[0].label, "HIGH reliance");
        assert_eq!(reliance[1].label, "MODERATE reliance");
        assert_eq!(reliance[2].range, "> 60.0% to < 100.0%");
        assert_eq!(reliance[2].label, "LOW reliance");
        assert_eq!(reliance[3].label, "NO reliance");
        assert!(reliance[3].message.unwrap().starts_with("CANNOT"));
    }

    #[test]
    fn test_control_rows_skip_empty_range() {
        let thresholds = BandThresholds::new(dec!(0.3), dec!(0.6), dec!(0.6)).unwrap();
        let section = LegendSection::build(ScaleKind::Control, &thresholds);
        assert_eq!(section.rows.len(), 6);
        assert_eq!(section.rows[4].label, "MODERATE reliance");
        assert_eq!(section.rows[5].label, "NO reliance");
    }

    #[test]
    fn test_inverse_rows_reversed() {
        let section = LegendSection::build(ScaleKind::Inverse, &BandThresholds::default());
        assert_eq!(section.rows[0].color, BandColor::Red);
        assert_eq!(section.rows[0].message, Some("HIGH extent of substantive testing"));
        assert_eq!(section.rows[2].color, BandColor::Green);
    }

    #[test]
    fn test_render_plain() {
        let text = render_legend(&BandThresholds::default(), false);
        assert!(text.contains("Inherent Risk (direct, bar only, no guidance)"));
        assert!(text.contains("Detection Risk (inverse)"));
        assert!(text.contains("LOW extent of substantive testing"));
        assert!(!text.contains('\x1b'));
    }
}
