// halalscreen-core/src/ports/market_data.rs

// What the screening use cases need from a market data provider, without knowing
// whether records come from a YAML file, a REST API or a database.

use crate::domain::market::{News, Stock, StockQuery};
use crate::error::HalalScreenError;
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn search_stocks(&self, query: &StockQuery) -> Result<Vec<Stock>, HalalScreenError>;

    /// Resolves a stock by id or ticker code.
    async fn find_stock(&self, key: &str) -> Result<Option<Stock>, HalalScreenError>;

    async fn categories(&self) -> Result<Vec<String>, HalalScreenError>;

    async fn news(&self) -> Result<Vec<News>, HalalScreenError>;

    async fn news_for_stock(&self, stock_id: &str) -> Result<Vec<News>, HalalScreenError>;
}
