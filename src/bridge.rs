//! Framix bridge
//!
//! Conversions between the two representations and the CSV dispatch that
//! goes with them. `TableValue` is a closed sum over the representations, so
//! every dispatch is an exhaustive match: the "neither representation" case
//! cannot be expressed, and the unsupported-type error survives only at the
//! boundaries where foreign values enter (a polars dtype outside the value
//! model, a mixed-kind table column).
//!
//! Operations:
//! 1. to_table
//! 1. to_frame
//! 1. ensure_table
//! 1. ensure_frame
//! 1. read_csv
//! 1. write_csv

use std::path::Path;

use polars::prelude::{Column as PolarsColumn, DataFrame, DataType};

use crate::csv::{self, CsvReadOptions, CsvWriteOptions};
use crate::{Column, FramixError, FramixResult, Table, Value};

// ================================================================================================
// TableValue
// ================================================================================================

/// A table in either representation.
#[derive(Debug, Clone)]
pub enum TableValue {
    Table(Table),
    Frame(DataFrame),
}

impl From<Table> for TableValue {
    fn from(tbl: Table) -> Self {
        TableValue::Table(tbl)
    }
}

impl From<DataFrame> for TableValue {
    fn from(df: DataFrame) -> Self {
        TableValue::Frame(df)
    }
}

impl TableValue {
    pub fn shape(&self) -> (usize, usize) {
        match self {
            TableValue::Table(tbl) => tbl.shape(),
            TableValue::Frame(df) => df.shape(),
        }
    }
}

// ================================================================================================
// Conversions
// ================================================================================================

/// Convert into representation A. An input already in representation A is
/// handed back as the same allocation; a frame is eagerly copied.
pub fn to_table(value: TableValue) -> FramixResult<Table> {
    match value {
        TableValue::Table(tbl) => Ok(tbl),
        TableValue::Frame(df) => frame_to_table(&df),
    }
}

/// Convert into representation B. Symmetric to [`to_table`].
pub fn to_frame(value: TableValue) -> FramixResult<DataFrame> {
    match value {
        TableValue::Frame(df) => Ok(df),
        TableValue::Table(tbl) => table_to_frame(&tbl),
    }
}

/// Alias of [`to_table`] for call-site readability.
pub fn ensure_table(value: TableValue) -> FramixResult<Table> {
    to_table(value)
}

/// Alias of [`to_frame`] for call-site readability.
pub fn ensure_frame(value: TableValue) -> FramixResult<DataFrame> {
    to_frame(value)
}

fn frame_to_table(df: &DataFrame) -> FramixResult<Table> {
    let mut columns = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        if !is_supported_dtype(col.dtype()) {
            return Err(FramixError::new_unsupported_type_error(col.dtype()));
        }

        let values = col
            .as_materialized_series()
            .iter()
            .map(Value::try_from)
            .collect::<FramixResult<Vec<_>>>()?;

        columns.push(Column::new(col.name().as_str(), values));
    }

    Table::new(columns)
}

fn table_to_frame(tbl: &Table) -> FramixResult<DataFrame> {
    let columns = tbl
        .columns()
        .iter()
        .map(|c| c.to_series().map(PolarsColumn::from))
        .collect::<FramixResult<Vec<_>>>()?;

    Ok(DataFrame::new(columns)?)
}

fn is_supported_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Null
            | DataType::Boolean
            | DataType::String
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

// ================================================================================================
// CSV dispatch
// ================================================================================================

/// Read a CSV file into the requested representation. Options go to the
/// selected reader verbatim; its errors come back verbatim.
pub fn read_csv<P: AsRef<Path>>(
    path: P,
    use_frame: bool,
    options: &CsvReadOptions,
) -> FramixResult<TableValue> {
    if use_frame {
        Ok(TableValue::Frame(csv::reader::read_frame(path, options)?))
    } else {
        Ok(TableValue::Table(csv::reader::read_table(path, options)?))
    }
}

/// Write a table in either representation to a CSV file, translating the
/// option vocabulary only when the target is a frame. Creates or overwrites
/// `path`; a mid-write failure is the underlying writer's to report, not
/// compensated for here.
pub fn write_csv<P: AsRef<Path>>(
    value: &TableValue,
    path: P,
    options: &CsvWriteOptions,
) -> FramixResult<()> {
    match value {
        TableValue::Frame(df) => {
            let translated = csv::translate_write_options(options)?;
            csv::writer::write_frame(df, path, &translated)
        }
        TableValue::Table(tbl) => csv::writer::write_table(tbl, path, options),
    }
}

#[cfg(test)]
mod test_bridge {
    use polars::prelude::{NamedFrom, Series};

    use super::*;
    use crate::table;

    #[test]
    fn table_passthrough_is_identity() {
        let tbl = table!["x" => [1i64, 2, 3]].unwrap();
        let ptr = tbl.columns()[0].values().as_ptr();

        let out = to_table(TableValue::Table(tbl)).unwrap();

        // same allocation, not a copy
        assert_eq!(out.columns()[0].values().as_ptr(), ptr);
    }

    #[test]
    fn frame_passthrough_is_identity() {
        let df = DataFrame::new(vec![Series::new("x".into(), vec![1i64, 2]).into()]).unwrap();
        let expected = df.clone();

        let out = to_frame(TableValue::Frame(df)).unwrap();

        assert!(out.equals(&expected));
    }

    #[test]
    fn table_round_trip() {
        let tbl = table![
            "id" => [1i64, 2, 3],
            "score" => [0.1, 0.5, 0.8],
            "label" => ["a", "b", "c"],
        ]
        .unwrap();

        let frame = to_frame(TableValue::Table(tbl.clone())).unwrap();
        assert_eq!(frame.shape(), (3, 3));

        let back = to_table(TableValue::Frame(frame)).unwrap();
        assert_eq!(back, tbl);
    }

    #[test]
    fn frame_round_trip() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), vec![Some(1i64), None, Some(3)]).into(),
            Series::new("b".into(), vec!["x", "y", "z"]).into(),
        ])
        .unwrap();

        let tbl = to_table(TableValue::Frame(df.clone())).unwrap();
        assert_eq!(tbl.get_column_names(), vec!["a", "b"]);
        assert_eq!(tbl.column("a").unwrap().values()[1], Value::Null);

        let back = to_frame(TableValue::Table(tbl)).unwrap();
        assert!(back.equals_missing(&df));
    }

    #[test]
    fn foreign_dtype_is_unsupported() {
        let inner = Series::new("i".into(), vec![1i64, 2]);
        let lists = Series::new("l".into(), &[inner.clone(), inner]);
        let df = DataFrame::new(vec![lists.into()]).unwrap();

        let err = to_table(TableValue::Frame(df)).unwrap_err();
        assert!(matches!(err, FramixError::UnsupportedType(_)));
    }

    #[test]
    fn ensure_aliases_match() {
        let mixed = || {
            Table::new(vec![Column::new(
                "x",
                vec![Value::Bool(true), Value::String("y".to_string())],
            )])
            .unwrap()
        };

        let e1 = to_frame(TableValue::Table(mixed())).unwrap_err();
        let e2 = ensure_frame(TableValue::Table(mixed())).unwrap_err();

        assert_eq!(e1.to_string(), e2.to_string());
    }
}
