use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

use crate::{error::Error, Result};

/// CSS selector for the distance/positions table on the qtm page.
pub const TABLE_SELECTOR: &str = "table.leftfloat";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    /// Each data row, one entry per `<td>`. `None` when the cell has no text node.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector should parse")
}

/// Trimmed text of a cell, or `None` if it contains no text node at all.
fn cell_text(cell: ElementRef<'_>) -> Option<String> {
    let mut parts = cell.text().peekable();
    parts.peek()?;
    Some(parts.collect::<String>().trim().to_string())
}

/// Locate the `leftfloat` table and pull out its data rows.
///
/// Rows holding any `<th>` are header rows and are dropped.
#[instrument(level = "info", skip(doc))]
pub fn extract_table(doc: &Html) -> Result<RawTable> {
    let table_sel = selector(TABLE_SELECTOR);
    let row_sel = selector("tr");
    let th_sel = selector("th");
    let td_sel = selector("td");

    let mut tables = doc.select(&table_sel);
    let table = tables
        .next()
        .ok_or_else(|| Error::NotFound(format!("no <table> matching `{}`", TABLE_SELECTOR)))?;
    let extra = tables.count();
    if extra > 0 {
        warn!(extra, "more than one leftfloat table; using the first");
    }

    let mut rows = Vec::new();
    for row in table.select(&row_sel) {
        if row.select(&th_sel).next().is_some() {
            continue;
        }
        rows.push(row.select(&td_sel).map(cell_text).collect::<Vec<_>>());
    }

    debug!(?rows, "raw table");
    Ok(RawTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn test_skips_header_rows() {
        let html = doc(r#"
            <table class="leftfloat">
              <tr><th>Distance</th><th>Positions</th><th>Distance</th><th>Positions</th></tr>
              <tr><td>0</td><td>1</td><td>11</td><td>1,092,739,179,885</td></tr>
              <tr><td>1</td><td> 12 </td><td>12</td><td>12,345</td></tr>
            </table>"#);
        let raw = extract_table(&html).unwrap();
        assert_eq!(
            raw.rows,
            vec![
                vec![
                    Some("0".to_string()),
                    Some("1".to_string()),
                    Some("11".to_string()),
                    Some("1,092,739,179,885".to_string())
                ],
                vec![
                    Some("1".to_string()),
                    Some("12".to_string()),
                    Some("12".to_string()),
                    Some("12,345".to_string())
                ],
            ]
        );
        assert!(raw
            .rows
            .iter()
            .flatten()
            .all(|c| c.as_deref() != Some("Distance")));
    }

    #[test]
    fn test_picks_leftfloat_table_only() {
        let html = doc(r#"
            <table class="other"><tr><td>x</td></tr></table>
            <table class="data leftfloat"><tr><td>120,000</td><td>3</td><td>150,000</td><td>4</td></tr></table>"#);
        let raw = extract_table(&html).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.rows[0][0].as_deref(), Some("120,000"));
    }

    #[test]
    fn test_empty_cell_is_none() {
        let html = doc(r#"<table class="leftfloat"><tr><td></td><td><b>7</b></td></tr></table>"#);
        let raw = extract_table(&html).unwrap();
        assert_eq!(raw.rows, vec![vec![None, Some("7".to_string())]]);
    }

    #[test]
    fn test_missing_table() {
        let html = doc(r#"<table class="rightfloat"><tr><td>1</td></tr></table>"#);
        assert!(matches!(extract_table(&html), Err(Error::NotFound(_))));
    }
}
