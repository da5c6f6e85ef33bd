// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run. Non-numeric cells are not errors;
/// they become `Count::NotANumber` during cleaning.
#[derive(Error, Debug)]
pub enum Error {
    #[error("GET {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned non-success status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row} has {len} cells, expected at least 4")]
    Shape { row: usize, len: usize },

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("plot: {0}")]
    Plot(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
