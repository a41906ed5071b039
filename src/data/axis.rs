//! Independent variable selection.

use super::SpeedupRecord;
use std::path::Path;

/// Y axis label shared by every plot.
pub const Y_LABEL: &str = "Speedup (T_serial / T_parallel)";

/// Marker that selects the grid axis when found in the input path.
const BY_GRID_MARKER: &str = "by_grid";

/// Independent variable plotted on the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    /// Grid size (gateSize).
    Grid,
    /// Search density.
    Rho,
}

impl XAxis {
    /// Pick the axis from the input file name: `by_grid` anywhere in the
    /// path means grid size, anything else means search density.
    pub fn detect(path: &Path) -> Self {
        if path.to_string_lossy().contains(BY_GRID_MARKER) {
            Self::Grid
        } else {
            Self::Rho
        }
    }

    /// Axis label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid size (gateSize)",
            Self::Rho => "Search density (ρ)",
        }
    }

    /// CSV column the axis reads.
    pub fn column(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Rho => "rho",
        }
    }

    /// X coordinate of a record.
    pub fn value(self, record: &SpeedupRecord) -> f64 {
        match self {
            Self::Grid => record.grid as f64,
            Self::Rho => record.rho,
        }
    }
}

/// Axis requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum XAxisChoice {
    /// Decide from the input file name.
    #[default]
    Auto,
    /// Grid size.
    Grid,
    /// Search density.
    Rho,
}

impl XAxisChoice {
    /// Resolve the choice against the input path.
    pub fn resolve(self, path: &Path) -> XAxis {
        match self {
            Self::Auto => XAxis::detect(path),
            Self::Grid => XAxis::Grid,
            Self::Rho => XAxis::Rho,
        }
    }
}
