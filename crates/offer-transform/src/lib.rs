//! Cleaning stages for offer event tables.
//!
//! Each stage is a plain function from [`EventFrame`] to a stage result
//! holding the new frame and its statistics. [`run_pipeline`] chains them
//! and assembles a [`PipelineReport`](offer_model::PipelineReport).

pub mod boolean;
pub mod coerce;
pub mod data_utils;
pub mod datetime;
pub mod dedupe;
pub mod error;
pub mod frame;
pub mod missing;
pub mod pipeline;

pub use boolean::{Normalized, normalize_booleans};
pub use coerce::{Coerced, coerce_column, coerce_types};
pub use datetime::{Canonicalized, canonical_date, canonical_time, canonicalize_datetimes};
pub use dedupe::{Deduplicated, drop_duplicate_rows};
pub use error::{Result, TransformError};
pub use frame::EventFrame;
pub use missing::{Filled, fill_missing};
pub use pipeline::{PipelineOutput, run_pipeline};
