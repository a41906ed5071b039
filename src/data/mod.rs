//! Data reading and representation.
//!
//! This module handles reading benchmark CSV files and grouping their rows
//! into one series per machine.

mod axis;
mod reader;
mod record;
mod series;

pub use axis::{XAxis, XAxisChoice, Y_LABEL};
pub use reader::DataReader;
pub use record::{parse_decimal, SpeedupRecord};
pub use series::{Bounds, Series, SeriesSet};
