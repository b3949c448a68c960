// halalscreen/src/commands/news.rs
//
// USE CASE: List market news, globally or for one stock.

use std::path::Path;

use halalscreen_core::domain::error::DomainError;
use halalscreen_core::ports::MarketDataSource;

use super::ProjectContext;
use super::render::status_badge;

pub async fn execute(project_dir: &Path, stock: Option<String>) -> anyhow::Result<()> {
    let ctx = ProjectContext::load(project_dir)?;
    let source = ctx.market_data()?;

    let news = match stock {
        Some(key) => {
            let stock = source
                .find_stock(&key)
                .await?
                .ok_or_else(|| DomainError::StockNotFound(key.clone()))?;
            println!("📰 News for {} ({})", stock.name, stock.code);
            source.news_for_stock(&stock.id).await?
        }
        None => {
            println!("📰 Market news");
            source.news().await?
        }
    };

    if news.is_empty() {
        println!("   Nothing to report.");
    }
    for n in &news {
        println!("\n   {} · {}", n.date, n.title);
        println!("   {} · {}", n.source, status_badge(n.sharia_status));
        println!("   {}", n.content);
    }
    Ok(())
}
