use image::ImageFormat;

use crate::error::CodecError;

/// Container formats the writer can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl OutputFormat {
    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

impl TryFrom<ImageFormat> for OutputFormat {
    type Error = CodecError;

    fn try_from(format: ImageFormat) -> Result<Self, Self::Error> {
        match format {
            ImageFormat::Png => Ok(OutputFormat::Png),
            ImageFormat::Jpeg => Ok(OutputFormat::Jpeg),
            ImageFormat::Bmp => Ok(OutputFormat::Bmp),
            other => Err(CodecError::UnsupportedFormat {
                reason: format!("{other:?} images cannot be re-encoded"),
            }),
        }
    }
}

/// Identify the container of `bytes` from its magic number.
pub fn detect_format(bytes: &[u8]) -> Result<OutputFormat, CodecError> {
    let format = image::guess_format(bytes).map_err(|e| CodecError::UnsupportedFormat {
        reason: e.to_string(),
    })?;
    OutputFormat::try_from(format)
}
