// halalscreen/src/commands/portfolio.rs
//
// USE CASE: Value the signed-in user's holdings.

use comfy_table::Cell;
use std::path::Path;

use halalscreen_core::application::value_portfolio;
use halalscreen_core::domain::market::PortfolioSummary;
use halalscreen_core::infrastructure::config::load_holdings;

use super::ProjectContext;
use super::render::{new_table, status_badge};
use crate::cli::OutputFormat;

pub async fn execute(project_dir: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let ctx = ProjectContext::load(project_dir)?;
    let session = ctx.session_store()?.load()?;
    let source = ctx.market_data()?;
    let holdings = load_holdings(&ctx.portfolio_path()?)?;

    let summary = value_portfolio(&source, &session, &holdings).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => print_summary(&summary),
    }
    Ok(())
}

fn print_summary(summary: &PortfolioSummary) {
    if summary.items.is_empty() {
        println!("💼 Portfolio is empty.");
        return;
    }

    let mut table = new_table(&[
        "Code", "Shares", "Bought", "Price", "Value", "Profit", "Status",
    ]);
    for item in &summary.items {
        table.add_row(vec![
            Cell::new(&item.stock.code),
            Cell::new(item.shares),
            Cell::new(format!("${:.2}", item.purchase_price)),
            Cell::new(format!("${:.2}", item.stock.price)),
            Cell::new(format!("${:.2}", item.current_value)),
            Cell::new(format!("{:+.2} ({:+.2}%)", item.profit, item.profit_percent)),
            Cell::new(status_badge(item.stock.sharia_status)),
        ]);
    }
    println!("💼 Portfolio");
    println!("{}", table);
    println!(
        "\n   Value: ${:.2}  Cost: ${:.2}  Profit: {:+.2} ({:+.2}%)",
        summary.total_value,
        summary.total_cost,
        summary.total_profit,
        summary.total_profit_percent
    );
    println!(
        "   Halal holdings: {} / {}",
        summary.halal_count,
        summary.items.len()
    );
}
