//! Benchmark CSV reader.

use super::{parse_decimal, SpeedupRecord};
use crate::error::{Result, SpeedplotError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const MACHINE: &str = "machine";
const GRID: &str = "grid";
const RHO: &str = "rho";
const SPEEDUP: &str = "speedup";

/// Positions of the required columns in the header.
#[derive(Debug, Clone, Copy)]
struct Columns {
    machine: usize,
    grid: usize,
    rho: usize,
    speedup: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SpeedplotError::missing_column(name))
        };

        Ok(Self {
            machine: find(MACHINE)?,
            grid: find(GRID)?,
            rho: find(RHO)?,
            speedup: find(SPEEDUP)?,
        })
    }
}

/// Benchmark CSV reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read every row of a benchmark CSV file.
    pub fn read_file(path: &Path, delimiter: u8) -> Result<Vec<SpeedupRecord>> {
        let file = File::open(path).map_err(|e| SpeedplotError::file_open(path.to_path_buf(), e))?;
        let records = Self::read_from(file, delimiter)?;
        tracing::info!("Read {} rows from {}", records.len(), path.display());
        Ok(records)
    }

    /// Read every row from any CSV source. The first row must be a header.
    pub fn read_from<R: Read>(source: R, delimiter: u8) -> Result<Vec<SpeedupRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let columns = Columns::locate(reader.headers()?)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(Self::parse_row(&row, columns)?);
        }

        Ok(records)
    }

    fn parse_row(row: &StringRecord, columns: Columns) -> Result<SpeedupRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize, name: &str| {
            row.get(idx)
                .ok_or_else(|| SpeedplotError::missing_field(line, name))
        };

        let grid_text = field(columns.grid, GRID)?;
        let grid = grid_text
            .parse::<i64>()
            .map_err(|_| SpeedplotError::invalid_number(line, GRID, grid_text))?;

        let decimal = |idx: usize, name: &str| {
            let text = field(idx, name)?;
            parse_decimal(text).ok_or_else(|| SpeedplotError::invalid_number(line, name, text))
        };

        Ok(SpeedupRecord {
            machine: field(columns.machine, MACHINE)?.to_string(),
            grid,
            rho: decimal(columns.rho, RHO)?,
            speedup: decimal(columns.speedup, SPEEDUP)?,
        })
    }
}
