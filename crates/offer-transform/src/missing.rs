//! Missing-value normalization.
//!
//! Blank text becomes null first, then every null is replaced by the
//! sentinel for its column kind: `0` for numbers, the unknown sentinel for
//! text and categories, the epoch timestamp for datetimes.

use std::collections::BTreeMap;

use polars::prelude::Column;
use regex::Regex;
use tracing::debug;

use offer_common::{any_to_f64, any_to_i64, column_strings};
use offer_model::{CleaningOptions, ColumnKind};

use crate::data_utils::{float_column, int_column, string_column};
use crate::error::Result;
use crate::frame::EventFrame;

/// A cell consisting only of whitespace, or nothing at all.
pub const BLANK_PATTERN: &str = r"^\s*$";

/// Output of the missing-value stage.
#[derive(Debug, Clone)]
pub struct Filled {
    pub frame: EventFrame,
    /// Cells replaced per column; columns with no replacements are omitted.
    pub filled: BTreeMap<String, usize>,
}

/// Replace blanks and nulls in every column with a known kind.
///
/// # Errors
///
/// Returns an error if a rebuilt column cannot be put back into the frame.
pub fn fill_missing(mut frame: EventFrame, options: &CleaningOptions) -> Result<Filled> {
    let blank = Regex::new(BLANK_PATTERN)?;
    let mut filled = BTreeMap::new();

    for name in frame.column_names() {
        let Some(kind) = frame.kind(&name) else {
            continue;
        };
        let source = frame.data.column(&name)?;
        let (column, count) = match kind {
            ColumnKind::Float => {
                let mut count = 0usize;
                let values = (0..source.len())
                    .map(|idx| {
                        let value = source.get(idx).ok().and_then(any_to_f64);
                        if value.is_none() {
                            count += 1;
                        }
                        Some(value.unwrap_or(0.0))
                    })
                    .collect();
                (float_column(&name, values), count)
            }
            ColumnKind::Integer => {
                let mut count = 0usize;
                let values = (0..source.len())
                    .map(|idx| {
                        let value = source.get(idx).ok().and_then(any_to_i64);
                        if value.is_none() {
                            count += 1;
                        }
                        Some(value.unwrap_or(0))
                    })
                    .collect();
                (int_column(&name, values), count)
            }
            ColumnKind::String | ColumnKind::Category => {
                fill_text(&name, column_strings(source), &blank, &options.unknown_sentinel)
            }
            ColumnKind::DateTime => {
                fill_text(&name, column_strings(source), &blank, &options.datetime_fill)
            }
        };
        if count == 0 {
            continue;
        }
        debug!(column = %name, kind = %kind, count, "filled missing values");
        frame.data.with_column(column)?;
        filled.insert(name, count);
    }

    // Category label sets always carry the sentinel, filled or not.
    for labels in frame.labels.values_mut() {
        labels.insert(options.unknown_sentinel.clone());
    }

    Ok(Filled { frame, filled })
}

fn fill_text(
    name: &str,
    cells: Vec<Option<String>>,
    blank: &Regex,
    sentinel: &str,
) -> (Column, usize) {
    let mut count = 0usize;
    let values: Vec<Option<String>> = cells
        .into_iter()
        .map(|cell| match cell {
            Some(value) if !blank.is_match(&value) => Some(value),
            _ => {
                count += 1;
                Some(sentinel.to_string())
            }
        })
        .collect();
    (string_column(name, values), count)
}
