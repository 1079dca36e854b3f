//! Wind product processor service.
//!
//! Reads a forecast job file (base64-encoded GRIB2 payloads plus
//! timestamps), derives wind speed/direction fields, and publishes a
//! densified GeoJSON direction product and a CSV table per entry to
//! object storage.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use forecast_processor::config::ProcessorConfig;
use forecast_processor::jobs;
use forecast_processor::pipeline::ProcessorPipeline;
use grib_decoder::GribWindDecoder;
use storage::ObjectStorage;

#[derive(Parser, Debug)]
#[command(name = "forecast-processor")]
#[command(about = "Wind speed/direction product processor")]
struct Args {
    /// Forecast job input file (JSON array of entries)
    input: PathBuf,

    /// Entries per processing batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Densification factor for the direction mesh
    #[arg(long)]
    densify_factor: Option<usize>,

    /// Keep processing remaining entries when one fails
    #[arg(long)]
    continue_on_error: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting forecast processor");

    // Load configuration; CLI flags override the environment
    let mut config = ProcessorConfig::from_env();
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(factor) = args.densify_factor {
        config.densify_factor = factor;
    }
    if args.continue_on_error {
        config.continue_on_error = true;
    }

    if config.batch_size == 0 {
        bail!("batch size must be positive");
    }
    if config.densify_factor == 0 {
        bail!("densification factor must be positive");
    }

    let entries = jobs::load_entries(&args.input)
        .with_context(|| format!("failed to read job input {}", args.input.display()))?;
    info!(
        entries = entries.len(),
        batch_size = config.batch_size,
        densify_factor = config.densify_factor,
        "Loaded job input"
    );

    let publisher = ObjectStorage::new(&config.storage)?;
    let pipeline = ProcessorPipeline::new(GribWindDecoder::new(), publisher, config);

    let summary = pipeline.run(&entries).await?;
    if summary.failed > 0 {
        bail!("{} of {} entries failed", summary.failed, summary.total);
    }

    info!(succeeded = summary.succeeded, "All forecast entries processed");
    Ok(())
}
