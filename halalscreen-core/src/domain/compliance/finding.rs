// halalscreen-core/src/domain/compliance/finding.rs

use crate::domain::compliance::standard::Direction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    /// `value` was computed; `is_compliant` follows the direction/threshold comparison.
    Measured,
    /// The denominator was missing and the zero-guard policy decided the verdict.
    Undefined,
}

/// One evaluated standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFinding {
    pub standard: String,
    pub description: String,
    /// Unrounded percentage; renderers round to two decimals. Can exceed 100.
    pub value: f64,
    pub threshold: f64,
    pub direction: Direction,
    pub is_compliant: bool,
    pub status: FindingStatus,
    pub details: String,
}

impl ComplianceFinding {
    /// Width of the progress bar a presentation layer should draw for this finding.
    pub fn progress_width(&self) -> f64 {
        super::display::directional_progress_width(self.value, self.threshold, self.direction)
    }
}

pub fn all_compliant(findings: &[ComplianceFinding]) -> bool {
    findings.iter().all(|f| f.is_compliant)
}
