//! Plot configuration.
//!
//! Sizes follow the usual publication conventions: the figure is described in
//! inches and points, and converted to pixels through the resolution.

/// Points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Figure geometry and resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    /// Dots per inch.
    pub dpi: u32,
    /// Point sizes for text, markers and lines.
    pub style: PlotStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width_in: 6.4,
            height_in: 4.8,
            dpi: 150,
            style: PlotStyle::default(),
        }
    }
}

impl PlotConfig {
    /// Output size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Convert a size in points to pixels at this resolution.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / POINTS_PER_INCH
    }
}

/// Point sizes used when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Title font size (pt).
    pub title_pt: f64,
    /// Axis and tick label font size (pt).
    pub label_pt: f64,
    /// Marker diameter (pt).
    pub marker_pt: f64,
    /// Line width (pt).
    pub line_pt: f64,
    /// Fraction of the data range added on each side of the axes.
    pub range_padding: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title_pt: 12.0,
            label_pt: 10.0,
            marker_pt: 3.0,
            line_pt: 1.5,
            range_padding: 0.05,
        }
    }
}
