//! Whitespace trimming.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── CropPipeline ────────────────────────────┐
//! │  read bytes → ImageLoader → BorderDetector → PixelBuffer::crop       │
//! │                                   │                  │               │
//! │                        FullExtent ┘                  ▼               │
//! │                        (unchanged)         ImageWriter → overwrite   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`BorderDetector`]: finds the smallest rectangle excluding pure-white
//!   border columns/rows, then pads and clamps it
//! - [`CropRect`]: inclusive pixel bounds
//! - [`CropOptions`]: which axes to scan and how much padding to keep
//! - [`CropPipeline`]: decode → detect → crop → encode → overwrite

mod detector;
mod options;
mod pipeline;
mod rect;

pub use detector::{BorderDetector, Detection};
pub use options::{CropAxes, CropOptions, DEFAULT_PADDING};
pub use pipeline::{CropOutcome, CropPipeline, Processed};
pub use rect::CropRect;
