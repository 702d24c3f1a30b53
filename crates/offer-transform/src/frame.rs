//! The table passed between cleaning stages.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;

use offer_model::ColumnKind;

use crate::data_utils::physical_kind;

/// A Polars `DataFrame` plus the semantic kind of each column.
///
/// Kinds start out as whatever the physical dtype implies and are replaced
/// by the declared kinds once coercion succeeds. Columns with no scalar
/// kind (nested, binary) are absent from `kinds` and pass through every
/// stage untouched.
#[derive(Debug, Clone)]
pub struct EventFrame {
    pub data: DataFrame,
    pub kinds: BTreeMap<String, ColumnKind>,
    /// Label sets of category columns.
    pub labels: BTreeMap<String, BTreeSet<String>>,
}

impl EventFrame {
    /// Wrap a freshly loaded table, deriving kinds from physical dtypes.
    pub fn new(data: DataFrame) -> Self {
        let kinds = data
            .get_columns()
            .iter()
            .filter_map(|column| {
                physical_kind(column.dtype()).map(|kind| (column.name().to_string(), kind))
            })
            .collect();
        Self {
            data,
            kinds,
            labels: BTreeMap::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn kind(&self, name: &str) -> Option<ColumnKind> {
        self.kinds.get(name).copied()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }
}
