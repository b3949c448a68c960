// halalscreen-core/src/domain/compliance/classifier.rs
//
// Seam for the business-activity screen. Industry classification is not derived from
// the financial statements, so it is injected rather than computed by the evaluator.

use crate::domain::compliance::profile::FinancialProfile;
use crate::domain::compliance::standard::ComplianceStandard;

/// Result of classifying a company's business activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityClassification {
    /// Share of activity considered permissible, in percent.
    pub value: f64,
    pub note: String,
}

pub trait ActivityClassifier: Send + Sync {
    fn classify(
        &self,
        profile: &FinancialProfile,
        standard: &ComplianceStandard,
    ) -> ActivityClassification;
}

/// Reports every company as fully permissible.
#[derive(Debug, Clone, Default)]
pub struct StaticActivityClassifier;

pub const STATIC_ACTIVITY_NOTE: &str =
    "Primary business activities are considered permissible (no industry exclusion applied)";

impl ActivityClassifier for StaticActivityClassifier {
    fn classify(
        &self,
        _profile: &FinancialProfile,
        _standard: &ComplianceStandard,
    ) -> ActivityClassification {
        ActivityClassification {
            value: 100.0,
            note: STATIC_ACTIVITY_NOTE.to_string(),
        }
    }
}
