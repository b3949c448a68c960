// halalscreen-core/src/application/portfolio.rs
//
// USE CASE: value the signed-in user's holdings at current catalog prices.

use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::market::{Holding, PortfolioItem, PortfolioSummary};
use crate::domain::session::Session;
use crate::error::HalalScreenError;
use crate::ports::market_data::MarketDataSource;

#[instrument(skip_all, fields(holdings = holdings.len()))]
pub async fn value_portfolio(
    source: &dyn MarketDataSource,
    session: &Session,
    holdings: &[Holding],
) -> Result<PortfolioSummary, HalalScreenError> {
    let user = session.require_user()?;

    let mut items = Vec::with_capacity(holdings.len());
    for holding in holdings {
        let stock = source
            .find_stock(&holding.stock_id)
            .await?
            .ok_or_else(|| DomainError::StockNotFound(holding.stock_id.clone()))?;
        items.push(PortfolioItem::new(holding, stock));
    }

    let summary = PortfolioSummary::from_items(items);
    info!(
        user = %user.email,
        total_value = summary.total_value,
        halal = summary.halal_count,
        "Portfolio valued"
    );
    Ok(summary)
}
