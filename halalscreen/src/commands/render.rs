// halalscreen/src/commands/render.rs

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use halalscreen_core::domain::compliance::{ComplianceFinding, Direction, FindingStatus};
use halalscreen_core::domain::market::{ShariaStatus, Stock};

const BAR_WIDTH: usize = 20;

pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(*h)));
    table
}

pub fn status_badge(status: ShariaStatus) -> String {
    match status {
        ShariaStatus::Halal => "🟢 Halal".to_string(),
        ShariaStatus::Haram => "🔴 Haram".to_string(),
    }
}

/// Text progress bar, `width` being a percentage in [0, 100].
pub fn progress_bar(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn findings_table(findings: &[ComplianceFinding]) -> Table {
    let mut table = new_table(&["Standard", "Value", "Rule", "Status", "Progress", "Details"]);
    for f in findings {
        let value = match f.status {
            FindingStatus::Measured => format!("{:.2}%", f.value),
            FindingStatus::Undefined => "n/a".to_string(),
        };
        let rule = match f.direction {
            Direction::MaxAllowed => format!("≤ {}%", f.threshold),
            Direction::MinRequired => format!("≥ {}%", f.threshold),
        };
        let status = if f.is_compliant { "✅" } else { "❌" };
        table.add_row(vec![
            Cell::new(&f.standard),
            Cell::new(value),
            Cell::new(rule),
            Cell::new(status),
            Cell::new(progress_bar(f.progress_width())),
            Cell::new(&f.details),
        ]);
    }
    table
}

pub fn stocks_table(stocks: &[Stock]) -> Table {
    let mut table = new_table(&["Id", "Code", "Name", "Price", "Change", "Category", "Status"]);
    for s in stocks {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.code),
            Cell::new(&s.name),
            Cell::new(format!("${:.2}", s.price)),
            Cell::new(format!("{:+.2} ({:+.2}%)", s.change, s.change_percent)),
            Cell::new(&s.category),
            Cell::new(status_badge(s.sharia_status)),
        ]);
    }
    table
}
