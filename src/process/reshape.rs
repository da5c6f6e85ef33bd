use tracing::{debug, instrument};

use super::sanitize::CleanTable;
use crate::{error::Error, Result};

/// Distance and position counts, paired by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesPair {
    pub distance: Vec<f64>,
    pub positions: Vec<f64>,
}

impl SeriesPair {
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distance
            .iter()
            .copied()
            .zip(self.positions.iter().copied())
    }
}

/// Each page row holds two (distance, positions) pairs side by side.
/// The left pairs come first in the output, then the right pairs, both in row order.
#[instrument(level = "info", skip(table), fields(rows = table.len()))]
pub fn reshape(table: &CleanTable) -> Result<SeriesPair> {
    if let Some((row, cells)) = table.rows.iter().enumerate().find(|(_, r)| r.len() < 4) {
        return Err(Error::Shape {
            row,
            len: cells.len(),
        });
    }

    let n = table.len();
    let mut distance = Vec::with_capacity(2 * n);
    let mut positions = Vec::with_capacity(2 * n);

    for half in [0, 2] {
        for row in &table.rows {
            distance.push(row[half].as_f64());
            positions.push(row[half + 1].as_f64());
        }
    }

    let series = SeriesPair {
        distance,
        positions,
    };
    debug!(?series, "reshaped");
    Ok(series)
}
