// halalscreen-core/src/domain/market/catalog.rs

use crate::domain::error::DomainError;
use crate::domain::market::stock::{News, Stock};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;
use validator::Validate;

/// Raw content of a market data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketDataset {
    #[serde(default)]
    pub stocks: Vec<Stock>,
    #[serde(default)]
    pub news: Vec<News>,
}

/// Search filter. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockQuery {
    pub term: Option<String>,
    pub category: Option<String>,
}

impl StockQuery {
    pub fn new(term: Option<String>, category: Option<String>) -> Self {
        Self {
            term: term.filter(|t| !t.trim().is_empty()),
            category: category.filter(|c| !c.is_empty()),
        }
    }

    pub fn matches(&self, stock: &Stock) -> bool {
        let term_ok = self.term.as_ref().is_none_or(|term| {
            let term = term.trim().to_lowercase();
            stock.name.to_lowercase().contains(&term) || stock.code.to_lowercase().contains(&term)
        });
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| &stock.category == category);
        term_ok && category_ok
    }
}

/// Validated, read-only view over a [`MarketDataset`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stocks: Vec<Stock>,
    news: Vec<News>,
}

impl Catalog {
    pub fn new(dataset: MarketDataset) -> Result<Self, DomainError> {
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();
        for stock in &dataset.stocks {
            stock.validate().map_err(|e| {
                DomainError::DatasetError(format!("stock '{}': {}", stock.id, e))
            })?;
            if !ids.insert(stock.id.as_str()) {
                return Err(DomainError::DatasetError(format!(
                    "duplicate stock id '{}'",
                    stock.id
                )));
            }
            if !codes.insert(stock.code.as_str()) {
                return Err(DomainError::DatasetError(format!(
                    "duplicate stock code '{}'",
                    stock.code
                )));
            }
        }

        let mut news_ids = HashSet::new();
        for item in &dataset.news {
            item.validate()
                .map_err(|e| DomainError::DatasetError(format!("news '{}': {}", item.id, e)))?;
            if !news_ids.insert(item.id.as_str()) {
                return Err(DomainError::DatasetError(format!(
                    "duplicate news id '{}'",
                    item.id
                )));
            }
            for related in &item.related_stocks {
                if !ids.contains(related.as_str()) {
                    warn!(news = %item.id, stock = %related, "News references an unknown stock");
                }
            }
        }

        Ok(Self {
            stocks: dataset.stocks,
            news: dataset.news,
        })
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn search(&self, query: &StockQuery) -> Vec<Stock> {
        self.stocks
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect()
    }

    pub fn stock_by_id(&self, id: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.id == id)
    }

    pub fn stock_by_code(&self, code: &str) -> Option<&Stock> {
        self.stocks
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
    }

    /// Id first, then ticker code.
    pub fn lookup(&self, key: &str) -> Option<&Stock> {
        self.stock_by_id(key).or_else(|| self.stock_by_code(key))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.stocks
            .iter()
            .filter(|s| seen.insert(s.category.as_str()))
            .map(|s| s.category.clone())
            .collect()
    }

    pub fn news(&self) -> &[News] {
        &self.news
    }

    pub fn news_for_stock(&self, stock_id: &str) -> Vec<News> {
        self.news
            .iter()
            .filter(|n| n.mentions(stock_id))
            .cloned()
            .collect()
    }
}
