//! Boolean-like column normalization.

use std::collections::BTreeMap;

use tracing::debug;

use offer_common::column_strings;
use offer_model::{BooleanTokens, ColumnKind};

use crate::data_utils::int_column;
use crate::error::Result;
use crate::frame::EventFrame;

/// Output of the boolean stage.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub frame: EventFrame,
    /// Cells per column that matched no token and were forced to `0`.
    pub unrecognized: BTreeMap<String, usize>,
}

/// Rewrite each listed column as `Int64` holding only `0` and `1`.
///
/// Cells are rendered to text, trimmed and lowercased, then matched against
/// `tokens`. Anything unrecognized, nulls included, becomes `0`. Listed
/// columns missing from the frame are skipped.
///
/// # Errors
///
/// Returns an error if a rebuilt column cannot be put back into the frame.
pub fn normalize_booleans(
    mut frame: EventFrame,
    columns: &[String],
    tokens: &BooleanTokens,
) -> Result<Normalized> {
    let mut unrecognized = BTreeMap::new();

    for name in columns {
        let Ok(source) = frame.data.column(name) else {
            debug!(column = %name, "boolean column absent");
            continue;
        };
        let (values, misses) = classify_cells(column_strings(source), tokens);
        frame.data.with_column(int_column(name, values))?;
        frame.kinds.insert(name.clone(), ColumnKind::Integer);
        frame.labels.remove(name);
        if misses > 0 {
            debug!(column = %name, count = misses, "unrecognized boolean tokens set to 0");
        }
        unrecognized.insert(name.clone(), misses);
    }

    Ok(Normalized {
        frame,
        unrecognized,
    })
}

/// Map cells to `0`/`1`, returning how many were not recognized.
pub fn classify_cells(
    cells: Vec<Option<String>>,
    tokens: &BooleanTokens,
) -> (Vec<Option<i64>>, usize) {
    let mut misses = 0usize;
    let values = cells
        .into_iter()
        .map(|cell| {
            let flag = cell.as_deref().and_then(|raw| tokens.classify(raw));
            if flag.is_none() {
                misses += 1;
            }
            Some(flag.unwrap_or(0))
        })
        .collect();
    (values, misses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tokens() {
        let cells = vec![
            Some(" TRUE ".to_string()),
            Some("No".to_string()),
            Some(String::new()),
            Some("1".to_string()),
            None,
            Some("maybe".to_string()),
        ];
        let (values, misses) = classify_cells(cells, &BooleanTokens::default());
        assert_eq!(
            values,
            vec![Some(1), Some(0), Some(0), Some(1), Some(0), Some(0)]
        );
        assert_eq!(misses, 3);
    }
}
