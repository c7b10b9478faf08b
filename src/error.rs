use thiserror::Error;

/// Errors raised by pixel buffers and locked raster access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Width or height was zero
    #[error("Invalid dimensions: {width}x{height} (both must be greater than 0)")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel coordinate outside the addressable grid
    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Region whose far edge lies before its near edge
    #[error("Empty region: left={left}, top={top}, right={right}, bottom={bottom}")]
    EmptyRegion {
        left: usize,
        top: usize,
        right: usize,
        bottom: usize,
    },

    /// Backing storage does not match the declared geometry
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Errors from the external image codec
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// Input bytes could not be decoded
    #[error("Failed to decode image: {message}")]
    Decode { message: String },

    /// Pixels could not be encoded
    #[error("Failed to encode image: {message}")]
    Encode { message: String },

    /// Container format is not one we can read back and write again
    #[error("Unsupported format: {reason}")]
    UnsupportedFormat { reason: String },
}

/// Errors surfaced by the crop pipeline.
///
/// "Nothing to crop" is not an error; see [`crate::crop::CropOutcome::Unchanged`].
#[derive(Debug, Clone, Error)]
pub enum CropError {
    /// Reading or overwriting the image file failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Decode or encode failure
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Pixel access failure
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    /// Options rejected before any pixel was touched
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl CropError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        CropError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
