//! Bramble CLI - Export and reporting tools.
//!
//! # Usage
//!
//! ```bash
//! # Export records to CSV (stdout, or a file via --out)
//! bramble-cli export users
//! bramble-cli export orders --out orders.csv
//! bramble-cli export products
//!
//! # Print the dashboard counters
//! bramble-cli stats
//! ```
//!
//! The Shop API endpoint comes from `SHOP_API_URL` (a `.env` file is
//! honored), same as the server binaries.
//!
//! # Commands
//!
//! - `export` - Write a record listing as CSV
//! - `stats` - Print the dashboard counters

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "bramble-cli")]
#[command(author, version, about = "Bramble Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a record listing as CSV
    Export {
        /// Which records to export
        #[arg(value_enum)]
        target: ExportTarget,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
    },
    /// Print the dashboard counters
    Stats,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportTarget {
    Users,
    Orders,
    Products,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let api_url =
        std::env::var("SHOP_API_URL").map_err(|_| "SHOP_API_URL must be set".to_string())?;

    match cli.command {
        Commands::Export { target, out } => {
            let kind = match target {
                ExportTarget::Users => commands::export::ExportKind::Users,
                ExportTarget::Orders => commands::export::ExportKind::Orders,
                ExportTarget::Products => commands::export::ExportKind::Products,
            };
            commands::export::run(&api_url, kind, out.as_deref()).await?;
        }
        Commands::Stats => {
            commands::stats::run(&api_url).await?;
        }
    }
    Ok(())
}
