pub mod compliance;
pub mod error;
pub mod market;
pub mod project;
pub mod session;

// Re-exports
pub use error::DomainError;
