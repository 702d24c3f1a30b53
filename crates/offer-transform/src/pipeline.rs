//! The full cleaning pipeline.
//!
//! Stages run in a fixed order, each taking the table by value:
//! coerce, fill missing, normalize booleans, canonicalize dates and times
//! (canonical profile only), drop duplicates.

use std::collections::BTreeMap;
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use offer_model::{CleaningOptions, ColumnReport, EventSchema, PipelineReport};

use crate::boolean::{Normalized, normalize_booleans};
use crate::coerce::{Coerced, coerce_types};
use crate::datetime::{Canonicalized, canonicalize_datetimes};
use crate::dedupe::{Deduplicated, drop_duplicate_rows};
use crate::error::Result;
use crate::frame::EventFrame;
use crate::missing::{Filled, fill_missing};

/// A cleaned table and the report describing how it got there.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub data: DataFrame,
    pub report: PipelineReport,
}

/// Clean a loaded event table.
///
/// Per-column cast failures do not stop the run; they are returned as
/// diagnostics in the report.
///
/// # Errors
///
/// Returns an error only when Polars fails to rebuild or filter the table.
pub fn run_pipeline(data: DataFrame, options: &CleaningOptions) -> Result<PipelineOutput> {
    let schema = EventSchema::for_profile(options.profile);
    let input_rows = data.height();
    let frame = EventFrame::new(data);

    let start = Instant::now();
    let Coerced { frame, diagnostics } =
        info_span!("coerce").in_scope(|| coerce_types(frame, &schema));
    info!(
        columns = frame.data.width(),
        failed = diagnostics.len(),
        duration_ms = start.elapsed().as_millis(),
        "coercion complete"
    );

    let start = Instant::now();
    let Filled { frame, filled } =
        info_span!("fill_missing").in_scope(|| fill_missing(frame, options))?;
    info!(
        cells = filled.values().sum::<usize>(),
        columns = filled.len(),
        duration_ms = start.elapsed().as_millis(),
        "missing values filled"
    );

    let start = Instant::now();
    let boolean_columns = schema.boolean_columns();
    let Normalized {
        frame,
        unrecognized,
    } = info_span!("booleans").in_scope(|| {
        normalize_booleans(frame, &boolean_columns, &options.boolean_tokens)
    })?;
    info!(
        columns = unrecognized.len(),
        unrecognized = unrecognized.values().sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "booleans normalized"
    );

    let (frame, failures) = if options.profile.canonicalizes_datetimes() {
        let start = Instant::now();
        let Canonicalized { frame, failures } = info_span!("datetimes")
            .in_scope(|| canonicalize_datetimes(frame, options.log_data))?;
        info!(
            failed = failures.values().sum::<usize>(),
            duration_ms = start.elapsed().as_millis(),
            "dates and times canonicalized"
        );
        (frame, failures)
    } else {
        (frame, BTreeMap::new())
    };

    let start = Instant::now();
    let Deduplicated { frame, removed } =
        info_span!("dedupe").in_scope(|| drop_duplicate_rows(frame))?;
    info!(
        removed,
        rows = frame.record_count(),
        duration_ms = start.elapsed().as_millis(),
        "duplicates dropped"
    );

    let columns = frame
        .data
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().as_str();
            let mut report = ColumnReport::new(
                name,
                schema.kind_of(name).or_else(|| frame.kind(name)),
                column.dtype().to_string(),
            );
            report.non_null = column.len() - column.null_count();
            report.filled = filled.get(name).copied().unwrap_or(0);
            report.unrecognized = unrecognized.get(name).copied().unwrap_or(0);
            report.parse_failures = failures.get(name).copied().unwrap_or(0);
            report.labels = frame
                .labels
                .get(name)
                .map(|labels| labels.iter().cloned().collect());
            report
        })
        .collect();

    let report = PipelineReport {
        profile: options.profile,
        input_rows,
        output_rows: frame.record_count(),
        duplicates_removed: removed,
        diagnostics,
        columns,
    };
    Ok(PipelineOutput {
        data: frame.data,
        report,
    })
}
