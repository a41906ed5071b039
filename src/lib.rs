//! Speedplot - plot benchmark speedup curves from CSV.
//!
//! Speedplot reads a CSV of benchmark measurements (machine, grid size, search
//! density, speedup), groups the rows by machine and draws one speedup line per
//! machine, either to an image file or as an interactive terminal chart.
//!
//! # Features
//!
//! - Decimal-comma tolerant number parsing
//! - Automatic choice of the independent variable from the file name
//! - PNG, JPEG, BMP and SVG output
//! - Terminal viewer with per-machine focus and Gruvbox themes
//!
//! # Example
//!
//! ```ignore
//! use speedplot::{config::PlotConfig, data::{DataReader, XAxis}, plot::Plot, render};
//! use std::path::Path;
//!
//! let path = Path::new("speedup_by_grid.csv");
//! let records = DataReader::read_file(path, b',')?;
//! let plot = Plot::new("Speedup", XAxis::detect(path), &records);
//! render::render_to_file(&plot, &PlotConfig::default(), Path::new("speedup.png"))?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod render;
pub mod summary;
pub mod ui;

pub use error::{Result, SpeedplotError};
