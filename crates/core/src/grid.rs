//! Grid normalization.
//!
//! Raw HTML rows are ragged and often padded with decorative cells. The
//! passes here turn them into a rectangular grid:
//!
//! 1. [`trim_empty_columns`] removes columns with no content in any row
//! 2. [`drop_empty_rows`] removes rows with no content at all
//! 3. [`normalize_width`] pads every row to the widest one
//!
//! The order is significant: a row that only carries data in a trimmed
//! column must be recognized as empty after trimming.

use crate::rows::Row;

/// Runs all three passes in order.
pub fn normalize(rows: Vec<Row>) -> Vec<Row> {
    let rows = trim_empty_columns(rows);
    let rows = drop_empty_rows(rows);
    normalize_width(rows)
}

fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

fn max_width(rows: &[Row]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0)
}

/// Removes columns that are blank in every row.
///
/// Missing cells of short rows count as blank. Rows that lack a kept column
/// get an empty string in its place.
pub fn trim_empty_columns(rows: Vec<Row>) -> Vec<Row> {
    let width = max_width(&rows);
    let keep: Vec<usize> = (0..width)
        .filter(|&col| rows.iter().any(|row| row.get(col).is_some_and(|cell| !is_blank(cell))))
        .collect();

    if keep.len() == width {
        return rows;
    }

    rows.into_iter()
        .map(|row| keep.iter().map(|&col| row.get(col).cloned().unwrap_or_default()).collect())
        .collect()
}

/// Removes rows whose cells are all blank.
pub fn drop_empty_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter()
        .filter(|row| row.iter().any(|cell| !is_blank(cell)))
        .collect()
}

/// Right-pads every row with empty strings to the widest row's length.
pub fn normalize_width(mut rows: Vec<Row>) -> Vec<Row> {
    let width = max_width(&rows);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}

/// Returns true if every row has the same number of fields.
pub fn is_rectangular(rows: &[Row]) -> bool {
    rows.windows(2).all(|pair| pair[0].len() == pair[1].len())
}
