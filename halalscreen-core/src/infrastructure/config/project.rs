// halalscreen-core/src/infrastructure/config/project.rs

use serde::{Deserialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::compliance::{StandardDefinition, ZeroGuard};
use crate::domain::project::ProjectConfig;
use crate::error::HalalScreenError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::resolve_in_project;

pub const CONFIG_CANDIDATES: [&str; 2] = ["halalscreen.yaml", "halalscreen.yml"];

pub const ENV_DATASET: &str = "HALALSCREEN_DATASET";
pub const ENV_ZERO_GUARD: &str = "HALALSCREEN_ZERO_GUARD";
pub const ENV_SESSION: &str = "HALALSCREEN_SESSION";

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, HalalScreenError> {
    load_project_config_with_env(project_dir, |key| std::env::var(key).ok())
}

/// Same as [`load_project_config`] with an injectable environment lookup.
pub fn load_project_config_with_env<F>(
    project_dir: &Path,
    env: F,
) -> Result<ProjectConfig, HalalScreenError>
where
    F: Fn(&str) -> Option<String>,
{
    // 1. Main file discovery
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Base YAML
    let mut config: ProjectConfig = load_fragment(&config_path)?;

    // 3. Satellites (fail-secure: a broken rules.yml stops everything)
    for folder in &config.config_paths.clone() {
        let config_dir = resolve_in_project(project_dir, folder)?;
        if config_dir.exists() {
            load_satellite_configs(&mut config, &config_dir)?;
        }
    }

    // 4. Environment layering
    apply_env_overrides(&mut config, env);

    config
        .validate()
        .map_err(|source| InfrastructureError::Validation {
            context: config_path.display().to_string(),
            source,
        })?;

    // Rule tables are compiled here so a bad direction fails at load, not at evaluation
    config.screening.rule_table()?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CONFIG_CANDIDATES
    )))
}

// --- GENERIC LOGIC ---

/// Loads a typed configuration fragment from a YAML file.
pub(crate) fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| InfrastructureError::yaml(path, e))
}

fn load_satellite_configs(
    config: &mut ProjectConfig,
    config_dir: &Path,
) -> Result<(), InfrastructureError> {
    let rules_path = config_dir.join("rules.yml");
    if rules_path.exists() {
        #[derive(Deserialize)]
        struct RulesWrapper {
            #[serde(rename = "zero-guard", alias = "zero_guard", default)]
            zero_guard: Option<ZeroGuard>,
            standards: Vec<StandardDefinition>,
        }

        let wrapper: RulesWrapper = load_fragment(&rules_path)?;
        info!(
            count = wrapper.standards.len(),
            "  📐 Screening standards loaded"
        );
        config.screening.standards = wrapper.standards;
        if let Some(zero_guard) = wrapper.zero_guard {
            config.screening.zero_guard = zero_guard;
        }
    }

    Ok(())
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = env(ENV_DATASET) {
        info!(old = ?config.dataset, new = ?val, "Overriding dataset via ENV");
        config.dataset = val;
    }
    if let Some(val) = env(ENV_SESSION) {
        info!(old = ?config.session_path, new = ?val, "Overriding session path via ENV");
        config.session_path = val;
    }
    if let Some(val) = env(ENV_ZERO_GUARD) {
        match ZeroGuard::from_str(&val) {
            Ok(policy) => {
                info!(old = %config.screening.zero_guard, new = %policy, "Overriding zero-guard via ENV");
                config.screening.zero_guard = policy;
            }
            Err(e) => warn!(value = %val, error = %e, "Ignoring invalid zero-guard override"),
        }
    }
}
