// halalscreen-core/src/domain/compliance/standard.rs

use crate::domain::compliance::profile::FinancialField;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Which side of the threshold is compliant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    MaxAllowed,
    MinRequired,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxAllowed => "max_allowed",
            Self::MinRequired => "min_required",
        }
    }

    pub fn is_satisfied(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::MaxAllowed => value <= threshold,
            Self::MinRequired => value >= threshold,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "max_allowed" | "maxallowed" | "max" => Ok(Self::MaxAllowed),
            "min_required" | "minrequired" | "min" => Ok(Self::MinRequired),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// How a standard derives its value.
#[derive(Debug, Clone, PartialEq)]
pub enum StandardRule {
    /// `sum(numerator) / denominator * 100`
    Ratio {
        numerator: Vec<FinancialField>,
        denominator: FinancialField,
    },
    /// Delegated to an [`ActivityClassifier`](super::classifier::ActivityClassifier).
    Classification,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceStandard {
    pub name: String,
    pub description: String,
    pub threshold: f64,
    pub direction: Direction,
    pub rule: StandardRule,
}

impl ComplianceStandard {
    pub fn ratio(
        name: &str,
        description: &str,
        numerator: &[FinancialField],
        denominator: FinancialField,
        threshold: f64,
        direction: Direction,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            threshold,
            direction,
            rule: StandardRule::Ratio {
                numerator: numerator.to_vec(),
                denominator,
            },
        }
    }

    pub fn classification(
        name: &str,
        description: &str,
        threshold: f64,
        direction: Direction,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            threshold,
            direction,
            rule: StandardRule::Classification,
        }
    }
}

/// Ordered set of standards. Evaluation order is table order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    standards: Vec<ComplianceStandard>,
}

pub const BUSINESS_ACTIVITY: &str = "Business Activity";
pub const DEBT_RATIO: &str = "Debt Ratio";
pub const LIQUID_ASSETS_RATIO: &str = "Liquid Assets Ratio";
pub const NON_PERMISSIBLE_INCOME_RATIO: &str = "Non-Permissible Income Ratio";
pub const ILLIQUID_ASSETS_RATIO: &str = "Illiquid Assets Ratio";

impl RuleTable {
    /// The AAOIFI-style screening table.
    pub fn standard() -> Self {
        use FinancialField::*;
        Self {
            standards: vec![
                ComplianceStandard::classification(
                    BUSINESS_ACTIVITY,
                    "Core business must not involve prohibited activities",
                    95.0,
                    Direction::MinRequired,
                ),
                ComplianceStandard::ratio(
                    DEBT_RATIO,
                    "Interest-bearing debt must not exceed 33% of total assets",
                    &[TotalDebt],
                    TotalAssets,
                    33.0,
                    Direction::MaxAllowed,
                ),
                ComplianceStandard::ratio(
                    LIQUID_ASSETS_RATIO,
                    "Cash and receivables must not exceed 33% of total assets",
                    &[CashAndCashEquivalents, AccountsReceivable],
                    TotalAssets,
                    33.0,
                    Direction::MaxAllowed,
                ),
                ComplianceStandard::ratio(
                    NON_PERMISSIBLE_INCOME_RATIO,
                    "Interest income must not exceed 5% of total revenue",
                    &[InterestIncome],
                    TotalRevenue,
                    5.0,
                    Direction::MaxAllowed,
                ),
                ComplianceStandard::ratio(
                    ILLIQUID_ASSETS_RATIO,
                    "Tangible assets must make up at least 20% of total assets",
                    &[PropertyPlantEquipment, Inventory],
                    TotalAssets,
                    20.0,
                    Direction::MinRequired,
                ),
            ],
        }
    }

    pub fn standards(&self) -> &[ComplianceStandard] {
        &self.standards
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    /// Compiles raw definitions into a table. All configuration mistakes surface here,
    /// so evaluation itself never has to deal with a malformed rule.
    pub fn compile(definitions: &[StandardDefinition]) -> Result<Self, DomainError> {
        if definitions.is_empty() {
            return Err(DomainError::ConfigurationError(
                "rule table declares no standards".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut standards = Vec::with_capacity(definitions.len());
        for def in definitions {
            standards.push(def.try_compile()?);
            if !seen.insert(def.name.to_lowercase()) {
                return Err(DomainError::ConfigurationError(format!(
                    "standard '{}' is declared twice",
                    def.name
                )));
            }
        }
        Ok(Self { standards })
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    #[default]
    Ratio,
    Classification,
}

/// One standard as written in `rules.yml`.
///
/// `direction` stays a string until compilation so that an unknown value is reported
/// as a configuration error naming the offending standard.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct StandardDefinition {
    #[validate(length(min = 1, message = "Standard name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: RuleKind,
    #[validate(range(min = 0.0, max = 100.0, message = "Threshold must be within 0..=100"))]
    pub threshold: f64,
    pub direction: String,
    #[serde(default)]
    pub numerator: Vec<FinancialField>,
    #[serde(default)]
    pub denominator: Option<FinancialField>,
}

impl StandardDefinition {
    pub fn try_compile(&self) -> Result<ComplianceStandard, DomainError> {
        self.validate().map_err(|e| {
            DomainError::ConfigurationError(format!("standard '{}': {}", self.name, e))
        })?;
        // range() lets NaN through
        if !self.threshold.is_finite() {
            return Err(DomainError::ConfigurationError(format!(
                "standard '{}': threshold must be a finite number",
                self.name
            )));
        }

        let direction = Direction::from_str(&self.direction).map_err(|e| {
            DomainError::ConfigurationError(format!("standard '{}': {}", self.name, e))
        })?;

        let rule = match self.kind {
            RuleKind::Classification => StandardRule::Classification,
            RuleKind::Ratio => {
                if self.numerator.is_empty() {
                    return Err(DomainError::ConfigurationError(format!(
                        "ratio standard '{}' needs at least one numerator field",
                        self.name
                    )));
                }
                let denominator = self.denominator.ok_or_else(|| {
                    DomainError::ConfigurationError(format!(
                        "ratio standard '{}' needs a denominator field",
                        self.name
                    ))
                })?;
                StandardRule::Ratio {
                    numerator: self.numerator.clone(),
                    denominator,
                }
            }
        };

        Ok(ComplianceStandard {
            name: self.name.clone(),
            description: self.description.clone(),
            threshold: self.threshold,
            direction,
            rule,
        })
    }
}
