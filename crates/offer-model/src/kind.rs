//! Semantic column kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared semantic type of a column.
///
/// The kind decides how a column is coerced and which sentinel fills its
/// missing cells; it is independent of the physical Polars dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Free text.
    String,
    /// Text drawn from a bounded, unordered label set.
    Category,
    /// 64-bit float.
    Float,
    /// 64-bit integer.
    Integer,
    /// Timestamp stored as `YYYY-MM-DD HH:MM:SS` text.
    DateTime,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Category => "category",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
