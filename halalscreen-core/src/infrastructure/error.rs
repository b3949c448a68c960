// halalscreen-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(halalscreen::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / DATA (YAML) ---
    #[error("YAML Parsing Error in '{path}': {source}")]
    #[diagnostic(
        code(halalscreen::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    // --- SESSION (JSON) ---
    #[error("JSON Error: {0}")]
    #[diagnostic(code(halalscreen::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Project configuration not found: {0}")]
    #[diagnostic(
        code(halalscreen::infra::config_missing),
        help("Create a halalscreen.yaml in the project directory.")
    )]
    ConfigNotFound(String),

    #[error("Validation failed for '{context}': {source}")]
    #[diagnostic(code(halalscreen::infra::validation))]
    Validation {
        context: String,
        #[source]
        source: validator::ValidationErrors,
    },
}

impl InfrastructureError {
    pub fn yaml(path: &std::path::Path, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.display().to_string(),
            source,
        }
    }
}
