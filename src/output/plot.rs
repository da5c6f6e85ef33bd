//! Log-scale chart of position counts per distance, rendered with [`plotters`]
//! to a 600x600 PNG.

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::{ops::Range, path::Path};
use tracing::{info, instrument, warn};

use crate::{error::Error, process::SeriesPair, Result};

const SIZE: (u32, u32) = (600, 600);
const TITLE: &str = "Rubik cube 3x3x3";

fn plot_err(e: impl std::fmt::Display) -> Error {
    Error::Plot(e.to_string())
}

/// Points that can sit on a log Y axis: finite, with a positive count.
pub fn drawable_points(series: &SeriesPair) -> Vec<(f64, f64)> {
    series
        .iter()
        .filter(|(d, p)| d.is_finite() && p.is_finite() && *p > 0.0)
        .collect()
}

/// Axis ranges with a little headroom; never empty.
///
/// With nothing to draw the chart still renders, over `0..1` x `1..10`.
fn axis_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    if points.is_empty() {
        return (0.0..1.0, 1.0..10.0);
    }
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let x_range = (x_min - 1.0)..(x_max + 1.0);
    // a decade of slack either side keeps the end markers off the frame
    let y_range = (y_min / 10.0)..(y_max * 10.0);
    (x_range, y_range)
}

/// Draw distance vs. positions (log Y) and save it to `path`, replacing any existing file.
///
/// Markers are joined by a dashed line; a legend labels the single series.
#[instrument(level = "info", skip(series), fields(points = series.len(), path = %path.display()))]
pub fn plot_series(series: &SeriesPair, path: &Path) -> Result<()> {
    let points = drawable_points(series);
    if points.is_empty() {
        warn!("no finite, positive points; rendering an empty chart");
    }
    let (x_range, y_range) = axis_ranges(&points);

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range.log_scale())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance")
        .y_desc("Positions")
        .axis_desc_style(("sans-serif", 18))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            points.clone(),
            6u32,
            4u32,
            BLACK.stroke_width(1),
        ))
        .map_err(plot_err)?
        .label("positions")
        .legend(|(x, y)| {
            EmptyElement::at((x, y))
                + PathElement::new(vec![(0, 0), (20, 0)], BLACK)
                + Circle::new((10, 0), 3, BLACK.filled())
        });

    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 4, BLACK.filled())))
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!("saved plot to {}", path.display());
    Ok(())
}
