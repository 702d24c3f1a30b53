use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Nested and binary columns have no scalar form to convert.
    #[error("unsupported source dtype {dtype}")]
    Uncoercible { dtype: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TransformError>;
