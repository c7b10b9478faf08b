//! Conversion between encoded images and [`PixelBuffer`](crate::pixel::PixelBuffer)s.
//!
//! Decoding and encoding are delegated to the `image` crate. Pixel copies in
//! both directions go through a [`LockedRaster`](crate::raster::LockedRaster)
//! session:
//!
//! ```text
//! bytes ──decode──▶ RgbImage ──lock/copy rows──▶ PixelBuffer
//! PixelBuffer ──lock/copy──▶ RgbImage ──encode──▶ bytes
//! ```
//!
//! - [`ImageLoader`]: decodes and copies rows, in parallel by default
//! - [`ImageWriter`]: copies pixels and encodes in the requested container

mod format;
mod loader;
mod writer;

pub use format::{detect_format, OutputFormat};
pub use loader::{ImageLoader, Parallelism};
pub use writer::ImageWriter;
