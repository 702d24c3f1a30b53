use std::fs::File;
use std::path::Path;
use std::time::Instant;

use polars::prelude::{CsvReadOptions, DataFrame, ParquetReader, SerReader};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Input path used when none is given.
pub const DEFAULT_INPUT_PATH: &str = "amex_offers_data.parquet";

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Parquet,
    /// Delimited text; every column is read as a string.
    Csv,
}

impl InputFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "parquet" | "pq" => Some(Self::Parquet),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Read the whole input file into memory.
///
/// # Errors
///
/// Returns an error when the file is missing, has an unsupported extension,
/// or cannot be decoded.
pub fn read_event_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = InputFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), ?format, "reading input");
    let start = Instant::now();
    let df = match format {
        InputFormat::Parquet => read_parquet(path)?,
        InputFormat::Csv => read_csv(path)?,
    };
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "input loaded"
    );
    Ok(df)
}

fn read_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ParquetReader::new(file)
        .finish()
        .map_err(|source| IngestError::Polars {
            path: path.to_path_buf(),
            source,
        })
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    // A zero-row inference window keeps every column as text; typing is
    // the coercion stage's job.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| IngestError::Polars {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("data.parquet")),
            Some(InputFormat::Parquet)
        );
        assert_eq!(
            InputFormat::from_path(Path::new("DATA.PQ")),
            Some(InputFormat::Parquet)
        );
        assert_eq!(
            InputFormat::from_path(Path::new("out/temp.csv")),
            Some(InputFormat::Csv)
        );
        assert_eq!(InputFormat::from_path(Path::new("data.json")), None);
        assert_eq!(InputFormat::from_path(Path::new("data")), None);
    }
}
