//! Vintry Ingest - one-shot wine quality CSV loader

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use vintry_common::logging::{init_logging, LogConfig, LogLevel};
use vintry_ingest::loader::{self, LoaderConfig};

#[derive(Parser, Debug)]
#[command(name = "vintry-ingest")]
#[command(author, version, about = "Wine quality CSV bulk loader")]
struct Cli {
    /// Path to the red wine source file
    #[arg(long, default_value = "./data/winequality-red.csv")]
    red: PathBuf,

    /// Path to the white wine source file
    #[arg(long, default_value = "./data/winequality-white.csv")]
    white: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env().unwrap_or_default();
    log_config.log_file_prefix = "vintry-ingest".to_string();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    let config = LoaderConfig::from_env()?;

    info!(
        red = %cli.red.display(),
        white = %cli.white.display(),
        "starting full reload"
    );
    let inserted = loader::run(&config, &cli.red, &cli.white).await?;
    info!(inserted, "ingestion complete");

    Ok(())
}
