//! Risk band classification
//!
//! Two cut points split every value into LOW / MODERATE / HIGH:
//! `value < moderate` is LOW, `value < high` is MODERATE, anything else HIGH.
//!
//! Control reliance uses the same cut points with strict `>` comparisons
//! (`>= maximum`, `> high`, `> moderate`), so exactly 0.3 reads as HIGH
//! reliance while its bar is already yellow. Both readings are kept as is.
//!
//! Detection risk runs the scale backwards: a low detection risk demands a
//! HIGH extent of substantive testing.

use auditrisk_core::RiskFraction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::ModelError;

/// Qualitative band
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Bar color for this band
    pub fn color(&self) -> BandColor {
        match self {
            RiskBand::Low => BandColor::Green,
            RiskBand::Moderate => BandColor::Yellow,
            RiskBand::High => BandColor::Red,
        }
    }

    /// Mirror image on the scale (LOW <-> HIGH)
    pub fn inverse(&self) -> RiskBand {
        match self {
            RiskBand::Low => RiskBand::High,
            RiskBand::Moderate => RiskBand::Moderate,
            RiskBand::High => RiskBand::Low,
        }
    }
}

/// Display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Green,
    Yellow,
    Red,
}

/// How a value is read against the bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Inherent risk: higher is riskier
    Direct,
    /// Control risk: direct, plus the "cannot rely" state at the maximum
    Control,
    /// Detection risk: lower demands more substantive testing
    Inverse,
}

/// Reliance the auditor can place on internal controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlReliance {
    High,
    Moderate,
    Low,
    /// Control risk assessed at maximum
    NoReliance,
}

/// Guidance message attached to a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum Guidance {
    /// Reliance on controls (direct and control scales)
    Reliance(ControlReliance),
    /// Extent of substantive testing (inverse scale)
    SubstantiveTesting(RiskBand),
}

impl Guidance {
    pub fn message(&self) -> &'static str {
        match self {
            Guidance::Reliance(ControlReliance::NoReliance) => {
                "CANNOT rely on controls if conclude control risk is MAXIMUM (with or without tests of operating effectiveness of controls)"
            }
            Guidance::Reliance(ControlReliance::Low) => {
                "LOW reliance on controls if tests of operating effectiveness indicate HIGH level of control risk"
            }
            Guidance::Reliance(ControlReliance::Moderate) => {
                "MODERATE reliance on controls if tests of operating effectiveness indicate MODERATE level of control risk"
            }
            Guidance::Reliance(ControlReliance::High) => {
                "HIGH reliance on controls if tests of operating effectiveness indicate LOW level of control risk"
            }
            Guidance::SubstantiveTesting(RiskBand::High) => "HIGH extent of substantive testing",
            Guidance::SubstantiveTesting(RiskBand::Moderate) => {
                "MODERATE extent of substantive testing"
            }
            Guidance::SubstantiveTesting(RiskBand::Low) => "LOW extent of substantive testing",
        }
    }

    /// Color of the message text
    pub fn color(&self) -> BandColor {
        match self {
            Guidance::Reliance(ControlReliance::High) => BandColor::Green,
            Guidance::Reliance(ControlReliance::Moderate) => BandColor::Yellow,
            Guidance::Reliance(ControlReliance::Low | ControlReliance::NoReliance) => BandColor::Red,
            Guidance::SubstantiveTesting(extent) => extent.color(),
        }
    }
}

/// Result of classifying one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: ScaleKind,
    /// For the inverse scale this is the required testing extent
    pub band: RiskBand,
    pub color: BandColor,
    pub guidance: Guidance,
}

impl Classification {
    pub fn message(&self) -> &'static str {
        self.guidance.message()
    }
}

/// Cut points of the band scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandThresholds {
    /// Values below are LOW
    moderate: Decimal,
    /// Values below are MODERATE
    high: Decimal,
    /// Control risk at or above cannot be relied on
    maximum: Decimal,
}

impl BandThresholds {
    pub const DEFAULT_MODERATE: Decimal = dec!(0.3);
    pub const DEFAULT_HIGH: Decimal = dec!(0.6);
    pub const DEFAULT_MAXIMUM: Decimal = dec!(1);

    /// Validated thresholds: `0 < moderate < high <= maximum <= 1`
    pub fn new(moderate: Decimal, high: Decimal, maximum: Decimal) -> Result<Self, ModelError> {
        let ordered = Decimal::ZERO < moderate
            && moderate < high
            && high <= maximum
            && maximum <= Decimal::ONE;

        if !ordered {
            return Err(ModelError::InvalidThresholds {
                moderate,
                high,
                maximum,
            });
        }

        Ok(Self {
            moderate,
            high,
            maximum,
        })
    }

    pub fn moderate(&self) -> Decimal {
        self.moderate
    }

    pub fn high(&self) -> Decimal {
        self.high
    }

    pub fn maximum(&self) -> Decimal {
        self.maximum
    }

    /// Band of the raw value, read directly
    pub fn level(&self, value: Decimal) -> RiskBand {
        if value < self.moderate {
            RiskBand::Low
        } else if value < self.high {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    /// Reliance on controls for a given control risk
    pub fn reliance(&self, value: Decimal, maximum_applies: bool) -> ControlReliance {
        if maximum_applies && value >= self.maximum {
            ControlReliance::NoReliance
        } else if value > self.high {
            ControlReliance::Low
        } else if value > self.moderate {
            ControlReliance::Moderate
        } else {
            ControlReliance::High
        }
    }

    /// Classify a value on the given scale
    pub fn classify(&self, value: Decimal, kind: ScaleKind) -> Classification {
        let level = self.level(value);

        let (band, guidance) = match kind {
            ScaleKind::Direct => (level, Guidance::Reliance(self.reliance(value, false))),
            ScaleKind::Control => (level, Guidance::Reliance(self.reliance(value, true))),
            ScaleKind::Inverse => {
                let extent = level.inverse();
                (extent, Guidance::SubstantiveTesting(extent))
            }
        };

        Classification {
            kind,
            band,
            color: band.color(),
            guidance,
        }
    }

    /// Classify a bounded fraction
    pub fn classify_fraction(&self, value: RiskFraction, kind: ScaleKind) -> Classification {
        self.classify(value.value(), kind)
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            moderate: Self::DEFAULT_MODERATE,
            high: Self::DEFAULT_HIGH,
            maximum: Self::DEFAULT_MAXIMUM,
        }
    }
}

/// Classify against the standard 30% / 60% cut points.
///
/// ```
/// use auditrisk_model::{classify, RiskBand, ScaleKind};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(classify(dec!(0.45), ScaleKind::Direct).band, RiskBand::Moderate);
/// assert_eq!(classify(dec!(0.25), ScaleKind::Inverse).band, RiskBand::High);
/// ```
pub fn classify(value: Decimal, kind: ScaleKind) -> Classification {
    BandThresholds::default().classify(value, kind)
}
