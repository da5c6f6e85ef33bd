// src/process/mod.rs
//! HTML table → cleaned cells → paired numeric series.

pub mod raw_table;
pub mod reshape;
pub mod sanitize;

pub use raw_table::{extract_table, RawTable};
pub use reshape::{reshape, SeriesPair};
pub use sanitize::{clean_cell, clean_table, digits_only, CleanTable, Count};
