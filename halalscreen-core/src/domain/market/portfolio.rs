// halalscreen-core/src/domain/market/portfolio.rs

use crate::domain::market::stock::{ShariaStatus, Stock};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A position as written in the portfolio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[validate(length(min = 1, message = "Holding must reference a stock id"))]
    pub stock_id: String,
    #[validate(range(min = 0.0, message = "Shares cannot be negative"))]
    pub shares: f64,
    #[validate(range(min = 0.0, message = "Purchase price cannot be negative"))]
    pub purchase_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub stock: Stock,
    pub shares: f64,
    pub purchase_price: f64,
    pub current_value: f64,
    pub cost: f64,
    pub profit: f64,
    pub profit_percent: f64,
}

impl PortfolioItem {
    pub fn new(holding: &Holding, stock: Stock) -> Self {
        let current_value = holding.shares * stock.price;
        let cost = holding.shares * holding.purchase_price;
        let profit = current_value - cost;
        Self {
            shares: holding.shares,
            purchase_price: holding.purchase_price,
            current_value,
            cost,
            profit,
            profit_percent: percent_of(profit, cost),
            stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub items: Vec<PortfolioItem>,
    pub total_value: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub total_profit_percent: f64,
    pub halal_count: usize,
}

impl PortfolioSummary {
    pub fn from_items(items: Vec<PortfolioItem>) -> Self {
        let total_value: f64 = items.iter().map(|i| i.current_value).sum();
        let total_cost: f64 = items.iter().map(|i| i.cost).sum();
        let total_profit = total_value - total_cost;
        let halal_count = items
            .iter()
            .filter(|i| i.stock.sharia_status == ShariaStatus::Halal)
            .count();
        Self {
            total_profit_percent: percent_of(total_profit, total_cost),
            items,
            total_value,
            total_cost,
            total_profit,
            halal_count,
        }
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}
