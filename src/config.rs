//! Command-line configuration.
//!
//! Scan settings can also come from the environment:
//!
//! - `SLIDE_CROP_AXES` - Axes to trim: `w`, `h` or `wh` (default: wh)
//! - `SLIDE_CROP_PADDING` - Pixels of border kept around content (default: 3)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use slide_crop::config::{Cli, Command};
//!
//! match Cli::parse().into_command() {
//!     Command::Crop(config) => println!("cropping {} file(s)", config.paths.len()),
//!     Command::Detect(config) => println!("scanning {} file(s)", config.paths.len()),
//! }
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::codec::Parallelism;
use crate::crop::{CropAxes, CropOptions, DEFAULT_PADDING};

// =============================================================================
// CLI Arguments
// =============================================================================

/// slide-crop - Trim white borders from rendered slide images.
#[derive(Parser, Debug, Clone)]
#[command(name = "slide-crop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Crop images in place.
    Crop(CropConfig),
    /// Report the detected crop rectangle without modifying files.
    Detect(DetectConfig),
}

/// Border scan settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Borders to remove: horizontally (w), vertically (h) or both (wh).
    ///
    /// Keeping the horizontal whitespace keeps slides aligned under each other.
    #[arg(long = "crop", value_enum, default_value_t = CropAxes::Both, env = "SLIDE_CROP_AXES")]
    pub axes: CropAxes,

    /// Pixels of white border kept around the content.
    #[arg(long, default_value_t = DEFAULT_PADDING, env = "SLIDE_CROP_PADDING")]
    pub padding: usize,

    /// Copy decoded rows on a single thread.
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl ScanArgs {
    pub fn to_options(&self) -> CropOptions {
        let parallelism = if self.sequential {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        };
        CropOptions::new(self.axes, self.padding).with_parallelism(parallelism)
    }
}

/// Configuration for the `crop` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CropConfig {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Image files to crop. Each is overwritten in place.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl CropConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.paths.is_empty() {
            return Err("at least one image path is required".to_string());
        }
        Ok(())
    }
}

/// Output format for the `detect` subcommand.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One human-readable line per file.
    #[default]
    Text,
    /// One JSON object per file.
    Json,
}

/// Configuration for the `detect` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DetectConfig {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Image files to scan.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl DetectConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.paths.is_empty() {
            return Err("at least one image path is required".to_string());
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
