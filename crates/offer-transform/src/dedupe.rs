//! Exact-duplicate row removal.

use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use offer_common::column_strings;

use crate::error::Result;
use crate::frame::EventFrame;

/// Output of the dedupe stage.
#[derive(Debug, Clone)]
pub struct Deduplicated {
    pub frame: EventFrame,
    pub removed: usize,
}

/// Drop rows identical in every column to an earlier row.
///
/// The first occurrence is kept and row order is preserved. A null cell
/// never equals an empty string.
///
/// # Errors
///
/// Returns an error if Polars cannot apply the row filter.
pub fn drop_duplicate_rows(mut frame: EventFrame) -> Result<Deduplicated> {
    let before = frame.data.height();
    let keep = first_occurrences(&frame.data);
    if keep.iter().all(|&kept| kept) {
        return Ok(Deduplicated { frame, removed: 0 });
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    frame.data = frame.data.filter(&mask)?;
    let removed = before - frame.data.height();
    Ok(Deduplicated { frame, removed })
}

/// `true` for each row whose full contents have not been seen before.
fn first_occurrences(df: &DataFrame) -> Vec<bool> {
    let cells: Vec<Vec<Option<String>>> = df.get_columns().iter().map(column_strings).collect();
    let mut seen = BTreeSet::new();
    (0..df.height())
        .map(|idx| {
            let row: Vec<Option<String>> = cells
                .iter()
                .map(|column| column.get(idx).cloned().flatten())
                .collect();
            seen.insert(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    use super::*;

    #[test]
    fn null_and_empty_are_distinct() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), &[Some(""), None, Some(""), None]).into_column(),
        ])
        .unwrap();
        assert_eq!(first_occurrences(&df), vec![true, true, false, false]);
    }
}
