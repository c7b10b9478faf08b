//! # slide-crop
//!
//! Trims uniform white borders from rendered slide images.
//!
//! An exported slide is decoded into an addressable [`PixelBuffer`], scanned
//! for the smallest rectangle that excludes pure-white border columns and
//! rows, cropped to that rectangle (plus padding), re-encoded and written
//! back over the original file.
//!
//! ## Architecture
//!
//! - [`pixel`] - RGB pixel and owned pixel grid
//! - [`raster`] - Locked 24bpp scan-line access over decoded bitmaps
//! - [`codec`] - Loading and writing encoded images
//! - [`crop`] - Border detection and the crop pipeline
//! - [`config`] - CLI types
//!
//! ## Example
//!
//! ```rust,no_run
//! use slide_crop::{CropAxes, CropOptions, CropOutcome, CropPipeline};
//!
//! # fn main() -> Result<(), slide_crop::CropError> {
//! let pipeline = CropPipeline::new(CropOptions::new(CropAxes::Both, 3))?;
//!
//! match pipeline.process("slide.png")? {
//!     CropOutcome::Cropped { rect, .. } => println!("kept {}x{}", rect.width(), rect.height()),
//!     CropOutcome::Unchanged { .. } => println!("nothing to crop"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod crop;
pub mod error;
pub mod pixel;
pub mod raster;

// Re-export commonly used types
pub use codec::{detect_format, ImageLoader, ImageWriter, OutputFormat, Parallelism};
pub use config::{Cli, Command, CropConfig, DetectConfig, ReportFormat, ScanArgs};
pub use crop::{
    BorderDetector, CropAxes, CropOptions, CropOutcome, CropPipeline, CropRect, Detection,
    Processed, DEFAULT_PADDING,
};
pub use error::{CodecError, CropError, RasterError};
pub use pixel::{Pixel, PixelBuffer};
pub use raster::{scan_line_stride, Bitmap, LockMode, LockedRaster, BYTES_PER_PIXEL};
