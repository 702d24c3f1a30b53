//! Delimited text output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::error::{OutputError, Result};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "temp.csv";

/// Options for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOutputOptions {
    pub delimiter: u8,
}

impl Default for CsvOutputOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Write `df` with a header row and no index column, creating parent
/// directories as needed. Returns the number of data rows written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or Polars fails to
/// serialize a column.
pub fn write_csv(df: &mut DataFrame, path: &Path, options: CsvOutputOptions) -> Result<usize> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let start = Instant::now();
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(options.delimiter)
        .finish(df)
        .map_err(|source| OutputError::Polars {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_error)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "output written"
    );
    Ok(df.height())
}
