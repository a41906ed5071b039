//! Plot description shared by the image renderer and the terminal viewer.

use crate::data::{SeriesSet, SpeedupRecord, XAxis, Y_LABEL};

/// Everything needed to draw one speedup chart.
#[derive(Debug, Clone)]
pub struct Plot {
    /// Chart title.
    pub title: String,
    /// Independent variable.
    pub axis: XAxis,
    /// One series per machine.
    pub series: SeriesSet,
}

impl Plot {
    /// Build a plot from raw records.
    pub fn new(title: impl Into<String>, axis: XAxis, records: &[SpeedupRecord]) -> Self {
        Self {
            title: title.into(),
            axis,
            series: SeriesSet::group(records, axis),
        }
    }

    /// X axis label.
    pub fn x_label(&self) -> &'static str {
        self.axis.label()
    }

    /// Y axis label.
    pub fn y_label(&self) -> &'static str {
        Y_LABEL
    }
}
