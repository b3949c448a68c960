// halalscreen-core/src/infrastructure/config/mod.rs

pub mod dataset;
pub mod project;

pub use crate::domain::project::ProjectConfig;
pub use dataset::{PortfolioFile, load_catalog, load_holdings};
pub use project::load_project_config;
