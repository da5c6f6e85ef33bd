use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use crate::{error::Error, process::SeriesPair, Result};

pub const CSV_HEADER: &str = "# distance, positions";

/// `120000.0`, `3.0`, `nan`. Debug formatting keeps the decimal point and
/// switches to exponent form for very large counts, both of which parse back.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{:?}", v)
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "series.csv".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

fn write_to(series: &SeriesPair, tmp_path: &Path) -> Result<()> {
    let file = File::create(tmp_path).map_err(|e| Error::io(tmp_path, e))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", CSV_HEADER).map_err(|e| Error::io(tmp_path, e))?;

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);
    for (d, p) in series.iter() {
        wtr.write_record([format_value(d), format_value(p)])?;
    }
    wtr.flush().map_err(|e| Error::io(tmp_path, e))?;
    Ok(())
}

/// Write the series as a two-column CSV, replacing `path` atomically.
#[instrument(level = "info", skip(series), fields(rows = series.len(), path = %path.display()))]
pub fn write_series(series: &SeriesPair, path: &Path) -> Result<()> {
    // write to a hidden sibling, then rename over the destination
    let tmp_path = tmp_path_for(path);
    if let Err(e) = write_to(series, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    fs::rename(&tmp_path, path).map_err(|e| Error::io(path, e))?;

    info!("wrote {} rows to {}", series.len(), path.display());
    Ok(())
}

/// Read a file produced by [`write_series`] back into a [`SeriesPair`].
pub fn read_series(path: &Path) -> Result<SeriesPair> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(file);

    let mut series = SeriesPair::default();
    for record in rdr.deserialize::<(f64, f64)>() {
        let (d, p) = record?;
        series.distance.push(d);
        series.positions.push(p);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scenario_output() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("positions.csv");
        let series = SeriesPair {
            distance: vec![120000.0, 150000.0],
            positions: vec![3.0, 4.0],
        };
        write_series(&series, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "# distance, positions\n120000.0,3.0\n150000.0,4.0\n"
        );
    }

    #[test]
    fn test_nan_renders_as_nan() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("positions.csv");
        let series = SeriesPair {
            distance: vec![5.0],
            positions: vec![f64::NAN],
        };
        write_series(&series, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1), Some("5.0,nan"));
        assert!(!text.contains(",0.0"));
    }

    #[test]
    fn test_round_trip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("positions.csv");
        let series = SeriesPair {
            distance: vec![0.0, 1.0, 21.0, 26.0],
            positions: vec![1.0, f64::NAN, 29_000_000_000_000_000_000.0, 0.0],
        };
        write_series(&series, &path).unwrap();
        let back = read_series(&path).unwrap();

        assert_eq!(back.distance, series.distance);
        assert_eq!(back.len(), series.len());
        for (a, b) in back.positions.iter().zip(&series.positions) {
            assert!(a == b || (a.is_nan() && b.is_nan()), "{} != {}", a, b);
        }
    }

    #[test]
    fn test_overwrites_existing() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("positions.csv");
        fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();

        let series = SeriesPair {
            distance: vec![1.0],
            positions: vec![12.0],
        };
        write_series(&series, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# distance, positions\n1.0,12.0\n"
        );
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("no/such/dir/positions.csv");
        let err = write_series(&SeriesPair::default(), &path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
