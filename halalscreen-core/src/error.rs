// halalscreen-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum HalalScreenError {
    // --- DOMAIN (compliance rules, invalid data, session) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (IO, parsing, validation) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Unsafe path traversal detected: {0}")]
    #[diagnostic(
        code(halalscreen::unsafe_path),
        help("Configured paths must stay inside the project directory.")
    )]
    UnsafePath(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for HalalScreenError {
    fn from(err: std::io::Error) -> Self {
        HalalScreenError::Infrastructure(InfrastructureError::Io(err))
    }
}
