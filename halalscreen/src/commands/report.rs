// halalscreen/src/commands/report.rs
//
// USE CASE: Screen the whole catalog and compare with declared labels.

use comfy_table::Cell;
use std::path::Path;

use halalscreen_core::application::{CatalogReport, screen_catalog};
use halalscreen_core::domain::market::StockQuery;

use super::ProjectContext;
use super::render::{new_table, status_badge};
use crate::cli::OutputFormat;

/// Returns `false` when `check` is set and a declared status disagrees.
pub async fn execute(
    project_dir: &Path,
    term: Option<String>,
    category: Option<String>,
    format: OutputFormat,
    check: bool,
) -> anyhow::Result<bool> {
    let ctx = ProjectContext::load(project_dir)?;
    let source = ctx.market_data()?;
    let evaluator = ctx.evaluator()?;

    let query = StockQuery::new(term, category);
    let report = screen_catalog(&source, &evaluator, &query).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&report),
    }

    let mismatches = report.mismatches();
    if check && !mismatches.is_empty() {
        eprintln!("\n❌ {} declared status mismatch(es):", mismatches.len());
        for s in &mismatches {
            eprintln!(
                "   {} declared {} but screens {}",
                s.stock.code, s.declared_status, s.computed_status
            );
        }
        return Ok(false);
    }
    Ok(true)
}

fn print_report(report: &CatalogReport) {
    println!("📊 Screening {} stock(s)...", report.screenings.len());

    let mut table = new_table(&["Code", "Name", "Category", "Computed", "Declared", "Failed"]);
    for s in &report.screenings {
        let failed: Vec<&str> = s.failed_standards().map(|f| f.standard.as_str()).collect();
        let declared = if s.matches_declaration() {
            status_badge(s.declared_status)
        } else {
            format!("{} ⚠️", status_badge(s.declared_status))
        };
        table.add_row(vec![
            Cell::new(&s.stock.code),
            Cell::new(&s.stock.name),
            Cell::new(&s.stock.category),
            Cell::new(status_badge(s.computed_status)),
            Cell::new(declared),
            Cell::new(failed.join(", ")),
        ]);
    }
    println!("{}", table);

    println!(
        "\n   Halal: {} / {}   Mismatches: {}",
        report.halal_count(),
        report.screenings.len(),
        report.mismatches().len()
    );
}
