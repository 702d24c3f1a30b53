//! The fixed offer event schema.
//!
//! Column names and their declared kinds are fixed per [`CleaningProfile`];
//! no schema inference happens beyond this list.

use serde::{Deserialize, Serialize};

use crate::kind::ColumnKind;
use crate::options::CleaningProfile;

pub const CUSTOMER_ID: &str = "customer_id";
pub const OFFER_ID: &str = "offer_id";
pub const EVENT_TS: &str = "event_ts";
pub const EVENT_DT: &str = "event_dt";
pub const OFFER_ACTION: &str = "offer_action";

/// Feature columns `var_1..=var_43` hold floats.
pub const FLOAT_FEATURES: std::ops::RangeInclusive<u32> = 1..=43;
/// Feature columns `var_44..=var_50` hold integer codes, mostly boolean-like.
pub const INTEGER_FEATURES: std::ops::RangeInclusive<u32> = 44..=50;

/// Name of the `n`th feature column.
pub fn feature_column(n: u32) -> String {
    format!("var_{n}")
}

/// A declared column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered mapping of column name to declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSchema {
    pub profile: CleaningProfile,
    pub columns: Vec<ColumnSpec>,
}

impl EventSchema {
    /// The declared schema for a cleaning profile.
    pub fn for_profile(profile: CleaningProfile) -> Self {
        let timestamp_kind = match profile {
            CleaningProfile::Standard => ColumnKind::DateTime,
            CleaningProfile::Canonical => ColumnKind::String,
        };
        let mut columns = vec![
            ColumnSpec::new(CUSTOMER_ID, ColumnKind::String),
            ColumnSpec::new(OFFER_ID, ColumnKind::Category),
            ColumnSpec::new(EVENT_TS, timestamp_kind),
            ColumnSpec::new(EVENT_DT, timestamp_kind),
            ColumnSpec::new(OFFER_ACTION, ColumnKind::String),
        ];
        columns.extend(
            FLOAT_FEATURES.map(|n| ColumnSpec::new(feature_column(n), ColumnKind::Float)),
        );
        columns.extend(
            INTEGER_FEATURES.map(|n| ColumnSpec::new(feature_column(n), ColumnKind::Integer)),
        );
        Self { profile, columns }
    }

    /// Declared kind of a column, if it is part of the schema.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSpec> {
        self.columns.iter()
    }

    /// Columns the boolean normalizer rewrites to `{0,1}`.
    pub fn boolean_columns(&self) -> Vec<String> {
        let mut columns = vec![OFFER_ACTION.to_string()];
        if self.profile == CleaningProfile::Canonical {
            columns.extend(INTEGER_FEATURES.map(feature_column));
        }
        columns
    }
}

impl<'a> IntoIterator for &'a EventSchema {
    type Item = &'a ColumnSpec;
    type IntoIter = std::slice::Iter<'a, ColumnSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schema_declares_fifty_five_columns() {
        let schema = EventSchema::for_profile(CleaningProfile::Standard);
        assert_eq!(schema.columns.len(), 55);
        assert_eq!(schema.kind_of(EVENT_DT), Some(ColumnKind::DateTime));
        assert_eq!(schema.kind_of("var_43"), Some(ColumnKind::Float));
        assert_eq!(schema.kind_of("var_44"), Some(ColumnKind::Integer));
        assert_eq!(schema.kind_of("var_51"), None);
    }

    #[test]
    fn canonical_schema_keeps_timestamps_as_text() {
        let schema = EventSchema::for_profile(CleaningProfile::Canonical);
        assert_eq!(schema.kind_of(EVENT_TS), Some(ColumnKind::String));
        assert_eq!(schema.kind_of(EVENT_DT), Some(ColumnKind::String));
    }

    #[test]
    fn boolean_columns_depend_on_profile() {
        let standard = EventSchema::for_profile(CleaningProfile::Standard);
        assert_eq!(standard.boolean_columns(), vec![OFFER_ACTION.to_string()]);

        let canonical = EventSchema::for_profile(CleaningProfile::Canonical);
        let columns = canonical.boolean_columns();
        assert_eq!(columns.len(), 8);
        assert_eq!(columns.last().map(String::as_str), Some("var_50"));
    }
}
