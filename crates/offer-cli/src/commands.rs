use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use offer_ingest::read_event_table;
use offer_output::write_csv;
use offer_transform::{PipelineOutput, run_pipeline};

use crate::types::{CleanRequest, CleanResult};

/// Load, clean and export one event table.
pub fn run_clean(request: &CleanRequest) -> Result<CleanResult> {
    let run_span = info_span!(
        "clean",
        input = %request.input.display(),
        profile = %request.options.profile
    );
    let _guard = run_span.enter();
    let start = Instant::now();

    let data = read_event_table(&request.input)
        .with_context(|| format!("load {}", request.input.display()))?;

    let PipelineOutput { mut data, report } =
        run_pipeline(data, &request.options).context("clean event table")?;

    let output = if request.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        write_csv(&mut data, &request.output, request.csv)
            .with_context(|| format!("write {}", request.output.display()))?;
        Some(request.output.clone())
    };

    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanResult {
        input: request.input.clone(),
        output,
        report,
    })
}
