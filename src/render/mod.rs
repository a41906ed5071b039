//! Image output.
//!
//! Charts are drawn with `plotters`, onto a bitmap or SVG backend depending on
//! the output file extension.

mod image;
mod palette;

pub use self::image::render_to_file;
pub use palette::{series_color, TAB10};

use crate::error::{Result, SpeedplotError};
use std::path::Path;

/// Image format of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG bitmap.
    Png,
    /// JPEG bitmap.
    Jpeg,
    /// BMP bitmap.
    Bmp,
    /// SVG vector image.
    Svg,
}

impl OutputFormat {
    /// Choose the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "svg" => Ok(Self::Svg),
            _ => Err(SpeedplotError::unsupported_format(extension)),
        }
    }

    /// True for pixel formats.
    pub fn is_bitmap(self) -> bool {
        !matches!(self, Self::Svg)
    }
}
