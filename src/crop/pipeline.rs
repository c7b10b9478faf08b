//! Crop pipeline: decode → detect → crop → encode → overwrite.

use std::fs;
use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::codec::{detect_format, ImageLoader, ImageWriter};
use crate::error::{CropError, RasterError};
use crate::pixel::PixelBuffer;

use super::{BorderDetector, CropOptions, CropRect, Detection};

/// What happened to one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CropOutcome {
    /// Borders were trimmed to `rect`.
    Cropped {
        rect: CropRect,
        original_width: usize,
        original_height: usize,
    },
    /// Content already spans the whole image.
    Unchanged { width: usize, height: usize },
}

impl CropOutcome {
    pub fn is_cropped(&self) -> bool {
        matches!(self, CropOutcome::Cropped { .. })
    }
}

/// Result of [`CropPipeline::process_bytes`].
#[derive(Debug, Clone)]
pub struct Processed {
    pub outcome: CropOutcome,
    /// Re-encoded image; `None` when the outcome is unchanged.
    pub encoded: Option<Bytes>,
}

/// Trims white borders from encoded images.
#[derive(Debug, Clone)]
pub struct CropPipeline {
    options: CropOptions,
    loader: ImageLoader,
    detector: BorderDetector,
}

impl CropPipeline {
    /// # Errors
    ///
    /// Returns [`CropError::InvalidOptions`] if `options` fail validation.
    pub fn new(options: CropOptions) -> Result<Self, CropError> {
        options.validate()?;
        Ok(Self {
            options,
            loader: ImageLoader::with_parallelism(options.parallelism),
            detector: BorderDetector::from_options(&options),
        })
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    /// Decode `bytes` and report what cropping would do, without encoding.
    pub fn detect_bytes(&self, bytes: &[u8]) -> Result<CropOutcome, CropError> {
        let buffer = self.loader.load(bytes)?;
        Ok(self.outcome_for(&buffer))
    }

    /// Crop an in-memory image. The output keeps the input's container
    /// format; the loader only decodes containers the writer can produce.
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<Processed, CropError> {
        let buffer = self.loader.load(bytes)?;
        let outcome = self.outcome_for(&buffer);

        let CropOutcome::Cropped { rect, .. } = outcome else {
            return Ok(Processed {
                outcome,
                encoded: None,
            });
        };

        let cropped = rect.apply(&buffer).ok_or(RasterError::EmptyRegion {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        })?;

        let format = detect_format(bytes)?;
        let encoded = ImageWriter::with_format(format).write(&cropped)?;

        Ok(Processed {
            outcome,
            encoded: Some(encoded),
        })
    }

    /// Crop the image at `path` and overwrite it in place. No backup is
    /// kept. The file is left untouched when there is nothing to crop.
    ///
    /// The new contents are written to a temporary file in the same
    /// directory and renamed over `path`, so a failed write never leaves
    /// a truncated image behind.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<CropOutcome, CropError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CropError::io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read image");

        let processed = self.process_bytes(&bytes)?;

        match (&processed.outcome, &processed.encoded) {
            (CropOutcome::Cropped { rect, .. }, Some(encoded)) => {
                replace_file(path, encoded)?;
                info!(
                    path = %path.display(),
                    width = rect.width(),
                    height = rect.height(),
                    "cropped image"
                );
            }
            _ => info!(path = %path.display(), "nothing to crop"),
        }

        Ok(processed.outcome)
    }

    /// Report what [`process`](Self::process) would do to `path` without
    /// writing anything.
    pub fn detect(&self, path: impl AsRef<Path>) -> Result<CropOutcome, CropError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CropError::io(path, e))?;
        self.detect_bytes(&bytes)
    }

    fn outcome_for(&self, buffer: &PixelBuffer) -> CropOutcome {
        let (width, height) = buffer.dimensions();
        match self.detector.detect(buffer) {
            Detection::Crop(rect) => CropOutcome::Cropped {
                rect,
                original_width: width,
                original_height: height,
            },
            Detection::FullExtent => CropOutcome::Unchanged { width, height },
        }
    }
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<(), CropError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| CropError::io(path, e))?;
    temp.write_all(contents).map_err(|e| CropError::io(path, e))?;
    temp.as_file().sync_all().map_err(|e| CropError::io(path, e))?;
    temp.persist(path).map_err(|e| CropError::io(path, e.error))?;
    Ok(())
}
