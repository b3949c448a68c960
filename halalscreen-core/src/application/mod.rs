// halalscreen-core/src/application/mod.rs

pub mod portfolio;
pub mod screening;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use halalscreen_core::application::{screen_stock, screen_catalog};`

pub use portfolio::value_portfolio;
pub use screening::{CatalogReport, StockScreening, screen_catalog, screen_stock};
