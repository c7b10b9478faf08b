//! In-memory pixel model.
//!
//! - [`Pixel`]: an 8-bit-per-channel RGB value (no alpha)
//! - [`PixelBuffer`]: an owned, fixed-size grid of pixels addressed by `(x, y)`
//!
//! This module has no codec dependencies; conversion to and from encoded
//! images lives in [`crate::codec`].

mod buffer;
mod color;

pub use buffer::PixelBuffer;
pub use color::Pixel;
