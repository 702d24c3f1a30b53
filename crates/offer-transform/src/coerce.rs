//! Type coercion against the declared event schema.
//!
//! Each declared column is converted on its own. A column that cannot be
//! converted is left exactly as it was and reported as a
//! [`CastDiagnostic`]; the remaining columns are still processed.

use std::collections::BTreeSet;

use polars::prelude::Column;
use tracing::{debug, warn};

use offer_common::{any_to_f64, any_to_i64, column_strings};
use offer_model::{CastDiagnostic, ColumnKind, EventSchema};

use crate::data_utils::{ensure_scalar, float_column, int_column, string_column};
use crate::datetime::canonical_timestamp;
use crate::error::Result;
use crate::frame::EventFrame;

/// Output of the coercion stage.
#[derive(Debug, Clone)]
pub struct Coerced {
    pub frame: EventFrame,
    pub diagnostics: Vec<CastDiagnostic>,
}

/// Convert every declared column present in the frame to its declared kind.
///
/// Numeric conversions coerce unparseable cells to null. Datetime columns
/// become `YYYY-MM-DD HH:MM:SS` text with unparseable cells null. Category
/// columns keep their text and gain a label set.
pub fn coerce_types(mut frame: EventFrame, schema: &EventSchema) -> Coerced {
    let mut diagnostics = Vec::new();

    for spec in schema {
        let Ok(source) = frame.data.column(&spec.name) else {
            debug!(column = %spec.name, kind = %spec.kind, "declared column absent");
            continue;
        };
        let converted = coerce_column(source, spec.kind).and_then(|column| {
            frame.data.with_column(column)?;
            Ok(())
        });
        match converted {
            Ok(()) => {
                frame.kinds.insert(spec.name.clone(), spec.kind);
                if spec.kind == ColumnKind::Category
                    && let Ok(column) = frame.data.column(&spec.name)
                {
                    frame
                        .labels
                        .insert(spec.name.clone(), category_labels(column));
                }
            }
            Err(error) => {
                warn!(
                    column = %spec.name,
                    target = %spec.kind,
                    error = %error,
                    "couldn't convert column, leaving it unchanged"
                );
                diagnostics.push(CastDiagnostic {
                    column: spec.name.clone(),
                    target: spec.kind,
                    message: error.to_string(),
                });
            }
        }
    }

    Coerced { frame, diagnostics }
}

/// Convert one column to `kind`, keeping its name.
pub fn coerce_column(source: &Column, kind: ColumnKind) -> Result<Column> {
    ensure_scalar(source.dtype())?;
    let name = source.name().as_str();
    let column = match kind {
        ColumnKind::String | ColumnKind::Category => string_column(name, column_strings(source)),
        ColumnKind::Float => {
            let values = (0..source.len())
                .map(|idx| source.get(idx).ok().and_then(any_to_f64))
                .collect();
            float_column(name, values)
        }
        ColumnKind::Integer => {
            let values = (0..source.len())
                .map(|idx| source.get(idx).ok().and_then(any_to_i64))
                .collect();
            int_column(name, values)
        }
        ColumnKind::DateTime => {
            let values = column_strings(source)
                .into_iter()
                .map(|cell| cell.as_deref().and_then(canonical_timestamp))
                .collect();
            string_column(name, values)
        }
    };
    Ok(column)
}

/// Distinct non-blank values of a text column.
fn category_labels(column: &Column) -> BTreeSet<String> {
    column_strings(column)
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        .collect()
}
