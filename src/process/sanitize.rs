use std::{fmt, num::ParseIntError};
use tracing::{debug, instrument, trace};

use super::raw_table::RawTable;

/// A cleaned cell: a position count / distance, or a marker for text that
/// held no usable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Value(u128),
    NotANumber,
}

impl Count {
    pub fn is_nan(&self) -> bool {
        matches!(self, Count::NotANumber)
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Count::Value(v) => v as f64,
            Count::NotANumber => f64::NAN,
        }
    }
}

impl From<Result<u128, ParseIntError>> for Count {
    fn from(parsed: Result<u128, ParseIntError>) -> Self {
        match parsed {
            Ok(v) => Count::Value(v),
            Err(e) => {
                trace!(error = %e, "not a number");
                Count::NotANumber
            }
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Value(v) => write!(f, "{}", v),
            Count::NotANumber => f.write_str("nan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanTable {
    pub rows: Vec<Vec<Count>>,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn nan_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_nan()).count()
    }
}

/// Keep only ASCII digits: drops thousands separators, units and stray markup.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Clean a single cell. Never fails.
pub fn clean_cell(raw: Option<&str>) -> Count {
    match raw {
        Some(s) => digits_only(s).parse::<u128>().into(),
        None => Count::NotANumber,
    }
}

/// Clean every cell, preserving row count and row widths.
#[instrument(level = "info", skip(raw), fields(rows = raw.len()))]
pub fn clean_table(raw: &RawTable) -> CleanTable {
    let rows: Vec<Vec<Count>> = raw
        .rows
        .iter()
        .map(|row| row.iter().map(|c| clean_cell(c.as_deref())).collect())
        .collect();

    let table = CleanTable { rows };
    debug!(rows = ?table.rows, nan = table.nan_count(), "cleaned table");
    table
}
