//! AuditRisk Model - Detection risk calculation and band classification
//!
//! Audit Risk = Inherent Risk × Control Risk × Detection Risk.
//! Detection risk is the dependent term: it is always derived from the
//! other three and never stored independently of them.

pub mod assessment;
pub mod band;
pub mod calculator;
pub mod command;
pub mod engine;
pub mod error;

pub use assessment::{RiskAssessment, RiskReading, FORMULA};
pub use band::{
    classify, BandColor, BandThresholds, Classification, ControlReliance, Guidance, RiskBand,
    ScaleKind,
};
pub use calculator::{compute_detection_risk, derive, DerivedRisk};
pub use command::{InputChange, SessionCommand};
pub use engine::RiskModel;
pub use error::ModelError;
