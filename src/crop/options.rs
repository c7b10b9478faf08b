use clap::ValueEnum;

use crate::codec::Parallelism;
use crate::error::CropError;

/// Padding kept around the detected content when none is given.
pub const DEFAULT_PADDING: usize = 3;

/// Which axes the border scan trims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CropAxes {
    /// Left and right borders only. Keeps slides vertically aligned.
    #[value(name = "w")]
    Width,
    /// Top and bottom borders only.
    #[value(name = "h")]
    Height,
    /// All four borders.
    #[default]
    #[value(name = "wh")]
    Both,
}

impl CropAxes {
    pub fn scans_width(self) -> bool {
        matches!(self, CropAxes::Width | CropAxes::Both)
    }

    pub fn scans_height(self) -> bool {
        matches!(self, CropAxes::Height | CropAxes::Both)
    }
}

/// Settings for one crop call. Passed explicitly; nothing is read from
/// global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropOptions {
    pub scan_width: bool,
    pub scan_height: bool,
    pub padding: usize,
    pub parallelism: Parallelism,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self::new(CropAxes::Both, DEFAULT_PADDING)
    }
}

impl CropOptions {
    pub fn new(axes: CropAxes, padding: usize) -> Self {
        Self {
            scan_width: axes.scans_width(),
            scan_height: axes.scans_height(),
            padding,
            parallelism: Parallelism::default(),
        }
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn validate(&self) -> Result<(), CropError> {
        if !self.scan_width && !self.scan_height {
            return Err(CropError::InvalidOptions(
                "at least one of width or height must be scanned".to_string(),
            ));
        }
        Ok(())
    }
}
