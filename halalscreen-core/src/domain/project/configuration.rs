// halalscreen-core/src/domain/project/configuration.rs

use crate::domain::compliance::{ComplianceEvaluator, RuleTable, StandardDefinition, ZeroGuard};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,

    /// Market data file (stocks + news), relative to the project directory.
    #[serde(default = "default_dataset")]
    #[validate(length(min = 1, message = "Dataset path cannot be empty"))]
    pub dataset: String,

    #[serde(rename = "config-paths", default)]
    pub config_paths: Vec<String>,

    #[serde(rename = "portfolio-path", default = "default_portfolio_path")]
    pub portfolio_path: String,

    #[serde(rename = "session-path", default = "default_session_path")]
    pub session_path: String,

    #[serde(default)]
    pub screening: ScreeningConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ScreeningConfig {
    #[serde(rename = "zero-guard", alias = "zero_guard", default)]
    pub zero_guard: ZeroGuard,
    /// Empty means the standard AAOIFI-style table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standards: Vec<StandardDefinition>,
}

impl ScreeningConfig {
    pub fn rule_table(&self) -> Result<RuleTable, DomainError> {
        if self.standards.is_empty() {
            Ok(RuleTable::standard())
        } else {
            RuleTable::compile(&self.standards)
        }
    }

    pub fn build_evaluator(&self) -> Result<ComplianceEvaluator, DomainError> {
        Ok(ComplianceEvaluator::new(self.rule_table()?).with_zero_guard(self.zero_guard))
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_dataset() -> String {
    "data/market.yaml".to_string()
}
fn default_portfolio_path() -> String {
    "data/portfolio.yaml".to_string()
}
fn default_session_path() -> String {
    ".halalscreen/session.json".to_string()
}
