// halalscreen-core/src/domain/compliance/mod.rs

pub mod classifier;
pub mod display;
pub mod evaluator;
pub mod finding;
pub mod profile;
pub mod standard;
pub mod zero_guard;

// Re-exports
pub use classifier::{ActivityClassification, ActivityClassifier, StaticActivityClassifier};
pub use display::{directional_progress_width, format_magnitude, progress_width};
pub use evaluator::{ComplianceEvaluator, evaluate};
pub use finding::{ComplianceFinding, FindingStatus, all_compliant};
pub use profile::{FinancialField, FinancialProfile};
pub use standard::{ComplianceStandard, Direction, RuleTable, StandardDefinition, StandardRule};
pub use zero_guard::ZeroGuard;
