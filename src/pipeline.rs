// src/pipeline.rs

use tokio::time::Instant;
use tracing::{info, instrument};

use crate::{
    config::Config,
    fetch,
    output::{plot_series, write_series},
    process::{clean_table, extract_table, reshape},
    Result,
};

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub points: usize,
    pub nan_cells: usize,
    pub plotted: bool,
}

/// load → extract → clean → reshape → CSV → plot.
///
/// Any failure stops the run before later stages touch the disk.
#[instrument(level = "info", skip(config))]
pub async fn run(config: &Config) -> Result<Summary> {
    let start = Instant::now();

    // ─── 1) load page ────────────────────────────────────────────────
    let doc = fetch::load_document(config).await?;

    // ─── 2) extract + clean ──────────────────────────────────────────
    let raw = extract_table(&doc)?;
    drop(doc);
    info!(rows = raw.len(), "extracted table");

    let clean = clean_table(&raw);
    let nan_cells = clean.nan_count();
    if nan_cells > 0 {
        info!(nan_cells, "cells without a number");
    }

    // ─── 3) reshape ──────────────────────────────────────────────────
    let series = reshape(&clean)?;

    // ─── 4) persist ──────────────────────────────────────────────────
    write_series(&series, &config.csv_path)?;

    // ─── 5) plot ─────────────────────────────────────────────────────
    if config.plot {
        plot_series(&series, &config.plot_path)?;
    }

    info!(elapsed = ?start.elapsed(), "pipeline done");
    Ok(Summary {
        rows: clean.len(),
        points: series.len(),
        nan_cells,
        plotted: config.plot,
    })
}
