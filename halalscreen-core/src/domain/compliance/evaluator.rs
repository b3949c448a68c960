// halalscreen-core/src/domain/compliance/evaluator.rs

use std::fmt;
use std::sync::Arc;

use crate::domain::compliance::classifier::{ActivityClassifier, StaticActivityClassifier};
use crate::domain::compliance::display::format_magnitude;
use crate::domain::compliance::finding::{ComplianceFinding, FindingStatus};
use crate::domain::compliance::profile::{FinancialField, FinancialProfile};
use crate::domain::compliance::standard::{ComplianceStandard, RuleTable, StandardRule};
use crate::domain::compliance::zero_guard::{Denominator, ZeroGuard};
use crate::domain::error::DomainError;

/// Scores a [`FinancialProfile`] against a [`RuleTable`].
///
/// The evaluator holds no mutable state: the same profile always yields the same
/// findings, in rule-table order.
#[derive(Clone)]
pub struct ComplianceEvaluator {
    table: RuleTable,
    zero_guard: ZeroGuard,
    classifier: Arc<dyn ActivityClassifier>,
}

impl ComplianceEvaluator {
    pub fn new(table: RuleTable) -> Self {
        Self {
            table,
            zero_guard: ZeroGuard::default(),
            classifier: Arc::new(StaticActivityClassifier),
        }
    }

    pub fn with_zero_guard(mut self, zero_guard: ZeroGuard) -> Self {
        self.zero_guard = zero_guard;
        self
    }

    pub fn with_classifier(mut self, classifier: impl ActivityClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn zero_guard(&self) -> ZeroGuard {
        self.zero_guard
    }

    pub fn evaluate(
        &self,
        profile: &FinancialProfile,
    ) -> Result<Vec<ComplianceFinding>, DomainError> {
        profile.check_finite()?;
        self.table
            .standards()
            .iter()
            .map(|standard| self.evaluate_standard(standard, profile))
            .collect()
    }

    fn evaluate_standard(
        &self,
        standard: &ComplianceStandard,
        profile: &FinancialProfile,
    ) -> Result<ComplianceFinding, DomainError> {
        match &standard.rule {
            StandardRule::Classification => {
                let classification = self.classifier.classify(profile, standard);
                if !classification.value.is_finite() {
                    return Err(DomainError::InvalidInput {
                        field: standard.name.clone(),
                        reason: format!(
                            "activity classifier returned {}",
                            classification.value
                        ),
                    });
                }
                Ok(measured(standard, classification.value, classification.note))
            }
            StandardRule::Ratio {
                numerator,
                denominator,
            } => {
                let top: f64 = numerator
                    .iter()
                    .map(|field| profile.get(*field).unwrap_or(0.0))
                    .sum();
                let details = ratio_details(profile, numerator, *denominator);

                match self.zero_guard.resolve(profile.get(*denominator)) {
                    Denominator::Value(bottom) => {
                        let value = top / bottom * 100.0;
                        // Finite amounts can still overflow once summed or scaled
                        if !value.is_finite() {
                            return Err(DomainError::InvalidInput {
                                field: standard.name.clone(),
                                reason: format!("ratio is not a finite number ({})", details),
                            });
                        }
                        Ok(measured(standard, value, details))
                    }
                    Denominator::Undefined { compliant } => Ok(ComplianceFinding {
                        standard: standard.name.clone(),
                        description: standard.description.clone(),
                        value: 0.0,
                        threshold: standard.threshold,
                        direction: standard.direction,
                        is_compliant: compliant,
                        status: FindingStatus::Undefined,
                        details: format!("{} ({} unavailable)", details, denominator.label()),
                    }),
                }
            }
        }
    }
}

impl Default for ComplianceEvaluator {
    fn default() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl fmt::Debug for ComplianceEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplianceEvaluator")
            .field("standards", &self.table.len())
            .field("zero_guard", &self.zero_guard)
            .finish()
    }
}

/// Evaluates a profile against the standard table with the default zero-guard.
pub fn evaluate(profile: &FinancialProfile) -> Result<Vec<ComplianceFinding>, DomainError> {
    ComplianceEvaluator::default().evaluate(profile)
}

fn measured(standard: &ComplianceStandard, value: f64, details: String) -> ComplianceFinding {
    ComplianceFinding {
        standard: standard.name.clone(),
        description: standard.description.clone(),
        value,
        threshold: standard.threshold,
        direction: standard.direction,
        is_compliant: standard.direction.is_satisfied(value, standard.threshold),
        status: FindingStatus::Measured,
        details,
    }
}

fn ratio_details(
    profile: &FinancialProfile,
    numerator: &[FinancialField],
    denominator: FinancialField,
) -> String {
    let top = numerator
        .iter()
        .map(|f| format!("{}: {}", f.label(), format_magnitude(profile.get(*f))))
        .collect::<Vec<_>>()
        .join(" + ");
    format!(
        "{} / {}: {}",
        top,
        denominator.label(),
        format_magnitude(profile.get(denominator))
    )
}
