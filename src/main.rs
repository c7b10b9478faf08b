//! slide-crop - Trim white borders from rendered slide images.
//!
//! This binary parses the CLI, configures logging and runs every path
//! through the crop pipeline.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slide_crop::{
    config::{Cli, Command, CropConfig, DetectConfig, ReportFormat},
    CropError, CropOutcome, CropPipeline,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Crop(config) => run_crop(config),
        Command::Detect(config) => run_detect(config),
    }
}

// =============================================================================
// Crop Command
// =============================================================================

fn run_crop(config: CropConfig) -> ExitCode {
    init_logging(config.scan.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let pipeline = match CropPipeline::new(config.scan.to_options()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for path in &config.paths {
        match pipeline.process(path) {
            Ok(outcome) => println!("{}", describe(path, &outcome)),
            Err(e) => {
                report_failure(path, &e);
                failures += 1;
            }
        }
    }

    finish(failures)
}

// =============================================================================
// Detect Command
// =============================================================================

fn run_detect(config: DetectConfig) -> ExitCode {
    init_logging(config.scan.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let pipeline = match CropPipeline::new(config.scan.to_options()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for path in &config.paths {
        match pipeline.detect(path) {
            Ok(outcome) => match config.format {
                ReportFormat::Text => println!("{}", describe(path, &outcome)),
                ReportFormat::Json => {
                    let json = serde_json::json!({
                        "path": path.display().to_string(),
                        "outcome": outcome,
                    });
                    println!("{}", json);
                }
            },
            Err(e) => {
                report_failure(path, &e);
                failures += 1;
            }
        }
    }

    finish(failures)
}

// =============================================================================
// Helpers
// =============================================================================

fn describe(path: &Path, outcome: &CropOutcome) -> String {
    match outcome {
        CropOutcome::Cropped {
            rect,
            original_width,
            original_height,
        } => format!(
            "{}: {}x{} -> {}x{} (left={}, top={}, right={}, bottom={})",
            path.display(),
            original_width,
            original_height,
            rect.width(),
            rect.height(),
            rect.left,
            rect.top,
            rect.right,
            rect.bottom
        ),
        CropOutcome::Unchanged { width, height } => {
            format!("{}: {}x{} unchanged", path.display(), width, height)
        }
    }
}

fn report_failure(path: &Path, err: &CropError) {
    error!("{}: {}", path.display(), err);
}

fn finish(failures: usize) -> ExitCode {
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        error!("{} file(s) could not be processed", failures);
        ExitCode::FAILURE
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "slide_crop=debug"
    } else {
        "slide_crop=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
