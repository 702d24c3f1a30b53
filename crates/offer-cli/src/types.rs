use std::path::PathBuf;

use offer_model::{CleaningOptions, PipelineReport};
use offer_output::CsvOutputOptions;

/// Everything a cleaning run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: CleaningOptions,
    pub csv: CsvOutputOptions,
    /// Run the pipeline without writing the output file.
    pub dry_run: bool,
}

/// Outcome of a cleaning run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Written file, or `None` for a dry run.
    pub output: Option<PathBuf>,
    pub report: PipelineReport,
}
