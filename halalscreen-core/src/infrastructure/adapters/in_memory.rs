// halalscreen-core/src/infrastructure/adapters/in_memory.rs

use async_trait::async_trait;

use crate::domain::market::{Catalog, News, Stock, StockQuery};
use crate::error::HalalScreenError;
use crate::ports::market_data::MarketDataSource;

/// Serves a [`Catalog`] loaded once from disk.
#[derive(Debug, Clone)]
pub struct InMemoryMarketData {
    catalog: Catalog,
}

impl InMemoryMarketData {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl MarketDataSource for InMemoryMarketData {
    async fn search_stocks(&self, query: &StockQuery) -> Result<Vec<Stock>, HalalScreenError> {
        Ok(self.catalog.search(query))
    }

    async fn find_stock(&self, key: &str) -> Result<Option<Stock>, HalalScreenError> {
        Ok(self.catalog.lookup(key).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>, HalalScreenError> {
        Ok(self.catalog.categories())
    }

    async fn news(&self) -> Result<Vec<News>, HalalScreenError> {
        Ok(self.catalog.news().to_vec())
    }

    async fn news_for_stock(&self, stock_id: &str) -> Result<Vec<News>, HalalScreenError> {
        Ok(self.catalog.news_for_stock(stock_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::market::catalog::tests::sample_catalog;
    use anyhow::Result;

    #[tokio::test]
    async fn test_port_delegates_to_catalog() -> Result<()> {
        let source = InMemoryMarketData::new(sample_catalog());
        assert_eq!(source.categories().await?.len(), 3);
        assert_eq!(source.news().await?.len(), 2);
        assert_eq!(
            source.find_stock("adnoc").await?.map(|s| s.id),
            Some("3".to_string())
        );
        assert!(source.find_stock("404").await?.is_none());
        let energy = source
            .search_stocks(&StockQuery::new(None, Some("Energy".into())))
            .await?;
        assert_eq!(energy.len(), 1);
        Ok(())
    }
}
