// halalscreen-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// What the use cases need from the outside world (market data).
pub mod ports;

// 2. Domain
// Compliance standards, evaluator, catalog, portfolio, session.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML config and dataset loaders, session file, in-memory market data.
pub mod infrastructure;

// 4. Application (Use Cases)
// Screening and portfolio valuation, wired through the ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::compliance::{
    ActivityClassifier, ComplianceEvaluator, ComplianceFinding, FinancialProfile, RuleTable,
    evaluate, format_magnitude, progress_width,
};
pub use error::HalalScreenError;
