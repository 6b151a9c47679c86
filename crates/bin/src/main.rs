//! Podium CLI binary.
//!
//! `podium serve` loads the athlete CSV once and serves the dashboard;
//! `podium export` writes the per-team aggregate for a filter selection.

mod export;
mod server;

use clap::{Args, Parser, Subcommand};
use podium::DashboardContext;
use podium_data::{DEFAULT_DATA_URL, DataSource};
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Podium: Olympics gender-representation dashboard", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the athlete CSV comes from; shared by both subcommands.
#[derive(Debug, Args)]
struct DataOpts {
    /// CSV URL fetched at startup
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    data_url: String,

    /// Read the CSV from a local file instead of fetching the URL
    #[arg(long)]
    data_file: Option<PathBuf>,
}

impl DataOpts {
    fn source(&self) -> DataSource {
        self.data_file.clone().map_or_else(
            || DataSource::Url(self.data_url.clone()),
            DataSource::Path,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the interactive dashboard
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value = "8050")]
        port: u16,

        #[command(flatten)]
        data: DataOpts,
    },

    /// Export the per-team aggregate for a year (and optionally a sport)
    Export {
        /// Olympic year
        #[arg(long)]
        year: i32,

        /// Restrict to one sport
        #[arg(long)]
        sport: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: export::ExportFormat,

        /// Output path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        data: DataOpts,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, data } => {
            let source = data.source();
            info!("Loading athlete data");
            let ctx = DashboardContext::load(&source).await?;
            info!(
                rows = ctx.table.height(),
                years = ctx.years.len(),
                sports = ctx.sports.len(),
                "Dataset loaded"
            );
            server::serve(&host, port, ctx).await?;
        }
        Commands::Export {
            year,
            sport,
            format,
            output,
            data,
        } => {
            let ctx = DashboardContext::load(&data.source()).await?;
            export::export_team_stats(
                &ctx.table,
                year,
                sport.as_deref(),
                format,
                output.as_deref(),
            )?;
        }
    }

    Ok(())
}
