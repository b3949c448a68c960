// halalscreen/src/commands/context.rs
//
// Wiring shared by every command: configuration, adapters, evaluator.

use anyhow::Context;
use std::path::{Path, PathBuf};

use halalscreen_core::domain::compliance::ComplianceEvaluator;
use halalscreen_core::domain::project::ProjectConfig;
use halalscreen_core::infrastructure::adapters::InMemoryMarketData;
use halalscreen_core::infrastructure::config::{load_catalog, load_project_config};
use halalscreen_core::infrastructure::fs::resolve_in_project;
use halalscreen_core::infrastructure::session::SessionStore;

pub struct ProjectContext {
    pub project_dir: PathBuf,
    pub config: ProjectConfig,
}

impl ProjectContext {
    pub fn load(project_dir: &Path) -> anyhow::Result<Self> {
        let config = load_project_config(project_dir).with_context(|| {
            format!(
                "Failed to load project configuration from {:?}",
                project_dir
            )
        })?;
        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            config,
        })
    }

    pub fn market_data(&self) -> anyhow::Result<InMemoryMarketData> {
        let path = resolve_in_project(&self.project_dir, &self.config.dataset)?;
        let catalog = load_catalog(&path)
            .with_context(|| format!("Failed to load market dataset {}", path.display()))?;
        Ok(InMemoryMarketData::new(catalog))
    }

    pub fn evaluator(&self) -> anyhow::Result<ComplianceEvaluator> {
        Ok(self.config.screening.build_evaluator()?)
    }

    pub fn session_store(&self) -> anyhow::Result<SessionStore> {
        let path = resolve_in_project(&self.project_dir, &self.config.session_path)?;
        Ok(SessionStore::new(path))
    }

    pub fn portfolio_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_in_project(
            &self.project_dir,
            &self.config.portfolio_path,
        )?)
    }
}
