//! Diagnostics and summaries produced by a cleaning run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::ColumnKind;
use crate::options::CleaningProfile;

/// A column whose coercion failed and was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastDiagnostic {
    pub column: String,
    pub target: ColumnKind,
    pub message: String,
}

impl fmt::Display for CastDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "couldn't convert {} to {}: {}",
            self.column, self.target, self.message
        )
    }
}

/// Post-transform state of one output column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    /// Declared kind, or `None` for columns outside the schema.
    pub kind: Option<ColumnKind>,
    /// Physical dtype as rendered by Polars.
    pub dtype: String,
    pub non_null: usize,
    /// Cells replaced by the missing-value filler.
    pub filled: usize,
    /// Cells the boolean normalizer did not recognize.
    pub unrecognized: usize,
    /// Cells the date/time canonicalizer could not parse.
    pub parse_failures: usize,
    /// Label set of a category column, sorted.
    pub labels: Option<Vec<String>>,
}

impl ColumnReport {
    pub fn new(
        name: impl Into<String>,
        kind: Option<ColumnKind>,
        dtype: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            dtype: dtype.into(),
            non_null: 0,
            filled: 0,
            unrecognized: 0,
            parse_failures: 0,
            labels: None,
        }
    }
}

/// Summary of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub profile: CleaningProfile,
    pub input_rows: usize,
    pub output_rows: usize,
    pub duplicates_removed: usize,
    pub diagnostics: Vec<CastDiagnostic>,
    pub columns: Vec<ColumnReport>,
}

impl PipelineReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Total cells the filler replaced across all columns.
    pub fn total_filled(&self) -> usize {
        self.columns.iter().map(|column| column.filled).sum()
    }

    /// Total null cells left in the output.
    pub fn remaining_nulls(&self) -> usize {
        self.columns
            .iter()
            .map(|column| self.output_rows.saturating_sub(column.non_null))
            .sum()
    }
}
