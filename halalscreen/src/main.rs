// halalscreen/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};
use halalscreen_core::HalalScreenError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing)
    // Logs go to stderr so `--format json` keeps a clean stdout.
    let level = if cli.verbose { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match run(cli).await {
        Ok(true) => {}
        // --check failures: the command already explained why
        Ok(false) => std::process::exit(1),
        Err(e) => {
            report_error(e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let project_dir = cli.project_dir;

    match cli.command {
        // --- USE CASE: SCREEN ONE STOCK ---
        Commands::Screen {
            stock,
            format,
            check,
        } => commands::screen::execute(&project_dir, &stock, format, check).await,

        // --- USE CASE: CATALOG REPORT ---
        Commands::Report {
            term,
            category,
            format,
            check,
        } => commands::report::execute(&project_dir, term, category, format, check).await,

        // --- USE CASE: BROWSE ---
        Commands::Search { term, category } => {
            commands::search::execute(&project_dir, term, category).await?;
            Ok(true)
        }
        Commands::Categories => {
            commands::search::categories(&project_dir).await?;
            Ok(true)
        }
        Commands::News { stock } => {
            commands::news::execute(&project_dir, stock).await?;
            Ok(true)
        }

        // --- USE CASE: PORTFOLIO ---
        Commands::Portfolio { format } => {
            commands::portfolio::execute(&project_dir, format).await?;
            Ok(true)
        }

        // --- USE CASE: SESSION ---
        Commands::Login { email, name } => {
            commands::session::login(&project_dir, &email, &name)?;
            Ok(true)
        }
        Commands::Logout => {
            commands::session::logout(&project_dir)?;
            Ok(true)
        }
        Commands::Whoami => {
            commands::session::whoami(&project_dir)?;
            Ok(true)
        }
    }
}

/// Library errors carry miette diagnostics (code + help), everything else is printed as a chain.
fn report_error(e: anyhow::Error) {
    match e.downcast::<HalalScreenError>() {
        Ok(err) => eprintln!("{:?}", miette::Report::new(err)),
        Err(other) => {
            eprintln!("💥 {}", other);
            for cause in other.chain().skip(1) {
                eprintln!("   caused by: {}", cause);
            }
        }
    }
}
