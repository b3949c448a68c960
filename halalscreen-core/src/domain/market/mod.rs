// halalscreen-core/src/domain/market/mod.rs

pub mod catalog;
pub mod portfolio;
pub mod stock;

pub use catalog::{Catalog, MarketDataset, StockQuery};
pub use portfolio::{Holding, PortfolioItem, PortfolioSummary};
pub use stock::{News, ShariaStatus, Stock};
