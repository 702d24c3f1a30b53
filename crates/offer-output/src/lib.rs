//! Export of cleaned event tables.

pub mod csv;
pub mod error;

pub use csv::{CsvOutputOptions, DEFAULT_OUTPUT_PATH, write_csv};
pub use error::{OutputError, Result};
