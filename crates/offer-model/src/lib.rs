pub mod error;
pub mod kind;
pub mod options;
pub mod report;
pub mod schema;

pub use error::{ModelError, Result};
pub use kind::ColumnKind;
pub use options::{BooleanTokens, CleaningOptions, CleaningProfile};
pub use report::{CastDiagnostic, ColumnReport, PipelineReport};
pub use schema::{ColumnSpec, EventSchema};
