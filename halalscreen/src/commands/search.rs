// halalscreen/src/commands/search.rs
//
// USE CASE: Browse the stock catalog.

use std::path::Path;

use halalscreen_core::domain::market::StockQuery;
use halalscreen_core::ports::MarketDataSource;

use super::ProjectContext;
use super::render::stocks_table;

pub async fn execute(
    project_dir: &Path,
    term: Option<String>,
    category: Option<String>,
) -> anyhow::Result<()> {
    let ctx = ProjectContext::load(project_dir)?;
    let source = ctx.market_data()?;

    let stocks = source
        .search_stocks(&StockQuery::new(term, category))
        .await?;

    if stocks.is_empty() {
        println!("🔎 No stock matches.");
        return Ok(());
    }

    println!("🔎 {} stock(s) found", stocks.len());
    println!("{}", stocks_table(&stocks));
    Ok(())
}

pub async fn categories(project_dir: &Path) -> anyhow::Result<()> {
    let ctx = ProjectContext::load(project_dir)?;
    let source = ctx.market_data()?;

    for category in source.categories().await? {
        println!("{}", category);
    }
    Ok(())
}
