//! Loading of offer event tables.
//!
//! The whole input file is read into one in-memory `DataFrame`; there is
//! no streaming path.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{DEFAULT_INPUT_PATH, InputFormat, read_event_table};
