mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::run::{run_reconcile, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "pricecmp")]
#[command(about = "Merge Coles and Foodland price exports into one product catalog")]
struct Cli {
    /// Coles JSON export (array of scraped listings).
    coles: PathBuf,

    /// Foodland JSON export (array of scraped listings).
    foodland: PathBuf,

    /// Where to write the catalog; overrides `PRICECMP_OUTPUT_PATH`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML field mapping; overrides `PRICECMP_RETAILERS_PATH`.
    #[arg(long)]
    retailers: Option<PathBuf>,

    /// Reconcile and print the summary without writing the catalog.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let config = pricecmp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    tracing::debug!(?config, "configuration loaded");

    let output_path = cli.output.unwrap_or(config.output_path);
    let retailers_path = cli.retailers.or(config.retailers_path);

    run_reconcile(&RunOptions {
        coles_path: &cli.coles,
        foodland_path: &cli.foodland,
        output_path: &output_path,
        retailers_path: retailers_path.as_deref(),
        pretty: config.pretty_output,
        dry_run: cli.dry_run,
    })?;

    Ok(())
}
