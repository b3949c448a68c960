// halalscreen/src/commands/screen.rs
//
// USE CASE: Screen a single stock and print its compliance findings.

use std::path::Path;

use halalscreen_core::application::{StockScreening, screen_stock};
use halalscreen_core::domain::compliance::format_magnitude;

use super::ProjectContext;
use super::render::{findings_table, status_badge};
use crate::cli::OutputFormat;

/// Returns `false` when `check` is set and the stock is not compliant.
pub async fn execute(
    project_dir: &Path,
    key: &str,
    format: OutputFormat,
    check: bool,
) -> anyhow::Result<bool> {
    let ctx = ProjectContext::load(project_dir)?;
    let source = ctx.market_data()?;
    let evaluator = ctx.evaluator()?;

    let screening = screen_stock(&source, &evaluator, key).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screening)?),
        OutputFormat::Table => print_screening(&screening),
    }

    let compliant = screening.failed_standards().next().is_none();
    if check && !compliant {
        eprintln!(
            "\n❌ {} fails {} standard(s).",
            screening.stock.code,
            screening.failed_standards().count()
        );
        return Ok(false);
    }
    Ok(true)
}

fn print_screening(screening: &StockScreening) {
    let stock = &screening.stock;
    println!("🕌 {} ({}) · {}", stock.name, stock.code, stock.category);
    println!(
        "   Price: ${:.2}  Change: {:+.2} ({:+.2}%)",
        stock.price, stock.change, stock.change_percent
    );
    println!(
        "   Market Cap: {}  Volume: {}",
        format_magnitude(stock.market_cap),
        format_magnitude(stock.volume)
    );
    println!(
        "   Total Assets: {}  Total Debt: {}  Revenue: {}",
        format_magnitude(stock.financials.total_assets),
        format_magnitude(stock.financials.total_debt),
        format_magnitude(stock.financials.total_revenue)
    );

    println!("\n{}", findings_table(&screening.findings));

    println!(
        "\n   Computed: {}   Declared: {}",
        status_badge(screening.computed_status),
        status_badge(screening.declared_status)
    );
    if !screening.matches_declaration() {
        println!("   ⚠️  Declared status disagrees with the screening.");
    }

    if !screening.news.is_empty() {
        println!("\n📰 Related news:");
        for n in &screening.news {
            println!("   {} · {} ({})", n.date, n.title, n.source);
        }
    }
}
