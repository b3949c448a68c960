// halalscreen/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "halalscreen")]
#[command(about = "Sharia compliance screening for equities and market news", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (where halalscreen.yaml lives)
    #[arg(long, global = true, default_value = ".", env = "HALALSCREEN_PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Print informational logs on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🕌 Screens one stock (by id or ticker) against the compliance standards
    Screen {
        /// Stock id or ticker code (ex: "ADNOC")
        stock: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Exit with error if the stock is not compliant
        #[arg(long)]
        check: bool,
    },

    /// 📊 Screens every stock of the catalog and compares with declared status
    Report {
        /// Filter on name or ticker
        #[arg(long, short)]
        term: Option<String>,

        /// Filter on exact category
        #[arg(long, short)]
        category: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Exit with error if a declared status disagrees with the screening
        #[arg(long)]
        check: bool,
    },

    /// 🔎 Searches the stock catalog
    Search {
        /// Matches name or ticker, case-insensitive
        #[arg(long, short)]
        term: Option<String>,

        /// Exact category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// 🗂️  Lists the catalog categories
    Categories,

    /// 📰 Lists market news, optionally for a single stock
    News {
        /// Stock id or ticker code
        #[arg(long)]
        stock: Option<String>,
    },

    /// 💼 Values the signed-in user's portfolio
    Portfolio {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// 🔑 Signs in the local user
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,
    },

    /// 🚪 Signs out the local user
    Logout,

    /// 👤 Shows the signed-in user
    Whoami,
}
