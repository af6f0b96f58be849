//! Audit an image-classification dataset laid out as one folder per class.
//!
//! ```text
//! dataset/
//!   apple/   img_001.jpg ...
//!   banana/  img_001.png ...
//! ```
//!
//! Each visible subfolder is a class. The auditor counts images (by
//! extension), sums folder sizes and reports how far every class is from the
//! largest one.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, AuditError};
pub use models::dataset_types::{ClassRecord, DatasetInfo, DatasetSummary};
pub use services::dataset_service::{count_dataset, scan_dataset};
pub use services::device_service::{DeviceStatusProvider, HostProvider};
pub use services::report_service::render_report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "dataset_auditor_lib=warn";

#[derive(Parser)]
#[command(name = "dataset-auditor")]
#[command(author, version, about = "Count images per class and report dataset imbalance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count images per class folder and print the summary table
    Count {
        /// Dataset root containing one subfolder per class
        path: String,

        /// Print the result as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Show GPU / framework availability
    Device,
}

/// `RUST_LOG` when set and valid, otherwise warnings from this crate only.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Count { path, json } => {
            commands::audit::audit_dataset(&path, json)?;
        }
        Commands::Device => {
            commands::device::device_status(&HostProvider)?;
        }
    }

    Ok(())
}
