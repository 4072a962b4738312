#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Cron entry point triggering the CubeAI daily usage reports.
//!
//! Runs `generate` when invoked without a subcommand, so the cron line can
//! stay a bare binary call.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cubeai_ops::infrastructure::reports::{ReportsApiConfig, ReportsClient};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(about = "Trigger CubeAI daily report generation and query report statistics")]
pub struct Args {
    /// The operation to run, defaults to `generate`
    #[command(subcommand)]
    pub command: Option<Command>,

    /// The reports API connection details
    #[clap(flatten)]
    pub api: ReportsApiConfig,
}

/// Report operations
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate and send the daily reports
    Generate {
        /// Report on this date instead of today (YYYY-MM-DD)
        #[clap(long)]
        date: Option<NaiveDate>,
    },

    /// Test report generation for a single session
    Test {
        /// The session to generate a report for
        session_id: String,

        /// Report on this date instead of today (YYYY-MM-DD)
        #[clap(long)]
        date: Option<NaiveDate>,
    },

    /// Retrieve report statistics over a date range
    Stats {
        /// Start of the range (YYYY-MM-DD)
        start_date: NaiveDate,

        /// End of the range (YYYY-MM-DD)
        end_date: NaiveDate,
    },
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let client = ReportsClient::new(args.api);

    match args.command.unwrap_or(Command::Generate { date: None }) {
        Command::Generate { date } => {
            let result = client.generate(date).await?;

            info!(
                "daily reports generated: {}",
                result["message"].as_str().unwrap_or_default()
            );
        }
        Command::Test { session_id, date } => {
            client.test_session(&session_id, date).await?;

            info!("report test succeeded for session {session_id}");
        }
        Command::Stats {
            start_date,
            end_date,
        } => {
            let stats = client.statistics(start_date, end_date).await?;

            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
