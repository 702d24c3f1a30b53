//! Column construction and dtype classification helpers.

use polars::prelude::{Column, DataType, IntoColumn, NamedFrom, Series};

use offer_model::ColumnKind;

use crate::error::{Result, TransformError};

/// The kind a physical dtype stands for, if any.
///
/// Booleans, temporal and nested dtypes have no kind of their own; only
/// declared columns of those dtypes get converted.
pub fn physical_kind(dtype: &DataType) -> Option<ColumnKind> {
    match dtype {
        DataType::String => Some(ColumnKind::String),
        DataType::Float32 | DataType::Float64 => Some(ColumnKind::Float),
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => Some(ColumnKind::Integer),
        _ => None,
    }
}

/// Fails for dtypes whose cells have no scalar text or numeric form.
pub fn ensure_scalar(dtype: &DataType) -> Result<()> {
    if dtype.is_nested() || matches!(dtype, DataType::Binary) {
        return Err(TransformError::Uncoercible {
            dtype: dtype.to_string(),
        });
    }
    Ok(())
}

pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}

pub fn float_column(name: &str, values: Vec<Option<f64>>) -> Column {
    Series::new(name.into(), values).into_column()
}

pub fn int_column(name: &str, values: Vec<Option<i64>>) -> Column {
    Series::new(name.into(), values).into_column()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_kinds() {
        assert_eq!(physical_kind(&DataType::String), Some(ColumnKind::String));
        assert_eq!(physical_kind(&DataType::Float32), Some(ColumnKind::Float));
        assert_eq!(physical_kind(&DataType::UInt8), Some(ColumnKind::Integer));
        assert_eq!(physical_kind(&DataType::Boolean), None);
    }

    #[test]
    fn nested_dtypes_are_not_scalar() {
        let list = DataType::List(Box::new(DataType::Int64));
        assert!(ensure_scalar(&list).is_err());
        assert!(ensure_scalar(&DataType::Binary).is_err());
        assert!(ensure_scalar(&DataType::Boolean).is_ok());
    }
}
