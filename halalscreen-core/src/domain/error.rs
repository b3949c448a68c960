// halalscreen-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Invalid input on '{field}': {reason}")]
    #[diagnostic(
        code(halalscreen::domain::invalid_input),
        help("Financial fields must be finite numbers (or left empty).")
    )]
    InvalidInput { field: String, reason: String },

    #[error("Rule table configuration error: {0}")]
    #[diagnostic(
        code(halalscreen::domain::configuration),
        help("Check the standards declared in rules.yml (direction, threshold, fields).")
    )]
    ConfigurationError(String),

    #[error("Stock '{0}' not found in catalog")]
    #[diagnostic(code(halalscreen::domain::stock_not_found))]
    StockNotFound(String),

    #[error("Dataset error: {0}")]
    #[diagnostic(code(halalscreen::domain::dataset))]
    DatasetError(String),

    #[error("No user is signed in")]
    #[diagnostic(
        code(halalscreen::domain::session),
        help("Run `halalscreen login --email <EMAIL> --name <NAME>` first.")
    )]
    NotSignedIn,
}
