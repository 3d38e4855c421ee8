//! Command execution for the photo renamer CLI
//!
//! Reads the input file, runs the rename pipeline, and writes the result to
//! standard output. All diagnostics go to stderr so stdout carries nothing
//! but the renamed filenames.

use std::fs;

use tracing::{debug, info};

use crate::cli::args::Args;
use crate::config::ValidationConfig;
use crate::{Error, RenamePipeline, RenameStats, Result};

/// Main command runner for the photo renamer
///
/// Checks that the input file exists before touching the core, reads it, runs
/// the pipeline, and prints the renamed filenames to stdout. Validation
/// errors from the core propagate as-is.
pub fn run(args: Args) -> Result<RenameStats> {
    setup_logging(&args);

    debug!("Arguments: {:?}", args);

    if !args.input_path.exists() {
        return Err(Error::file_not_found(args.input_path.display().to_string()));
    }

    let input = fs::read_to_string(&args.input_path).map_err(|e| {
        Error::io(
            format!("failed to read '{}'", args.input_path.display()),
            e,
        )
    })?;

    info!("Renaming photos from {}", args.input_path.display());
    let pipeline = RenamePipeline::new(ValidationConfig::default());
    let outcome = pipeline.run(&input)?;

    println!("{}", outcome.output);

    info!(
        "Renamed {} photos across {} cities",
        outcome.stats.photo_count, outcome.stats.city_count
    );
    Ok(outcome.stats)
}

/// Set up structured logging to stderr
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("photo_renamer={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
