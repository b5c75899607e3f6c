use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use report_uploader::cli::{Args, Commands};
use report_uploader::cloud::s3::S3Store;
use report_uploader::config::{self, RunConfig};
use report_uploader::pipeline;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Handle subcommands
    if let Some(Commands::InitConfig { path }) = &args.command {
        info!("Creating default configuration file at {}", path.display());
        RunConfig::default().save_to_yaml_file(path)?;
        info!("Configuration created successfully");
        return Ok(());
    }

    info!("Starting daily report upload");

    let config = load_and_override_config(&args)?;
    let store = S3Store::new(config.region.as_deref(), config.profile.as_deref())?;

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let summary = runtime.block_on(pipeline::run(&config, &store, args.skip_upload))?;

    match &summary.uploaded_key {
        Some(key) => info!(
            "Run complete: {} files archived, uploaded to '{}' as '{}'",
            summary.archived, config.bucket, key
        ),
        None => info!(
            "Run complete: {} files archived, upload skipped",
            summary.archived
        ),
    }

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Load the run configuration and apply command-line overrides
fn load_and_override_config(args: &Args) -> Result<RunConfig> {
    let mut config = config::load_or_default(args.config.as_deref())?;

    if let Some(bucket) = &args.bucket {
        config.bucket = bucket.clone();
    }
    if let Some(dir) = &args.reports_dir {
        config.reports_dir = dir.clone();
    }
    if let Some(archive) = &args.archive {
        config.archive_path = archive.clone();
    }
    if let Some(region) = &args.region {
        config.region = Some(region.clone());
    }
    if let Some(profile) = &args.profile {
        config.profile = Some(profile.clone());
    }

    Ok(config)
}
