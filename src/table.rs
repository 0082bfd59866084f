//! Framix Table
//!
//! This module contains the Table struct, the crate-owned columnar frame:
//! an ordered collection of named, value-typed, eagerly materialized columns.
//!
//! Methods:
//! 1. new
//! 1. empty
//! 1. column
//! 1. columns
//! 1. get_column_names
//! 1. dtypes
//! 1. shape
//! 1. width
//! 1. height
//! 1. is_empty

use itertools::Itertools;
use polars::prelude::{NamedFrom, PlSmallStr, Series as PolarsSeries};
use serde::{Deserialize, Serialize};

use crate::{FramixError, FramixResult, Value, ValueType};

// ================================================================================================
// Column
// ================================================================================================

/// A named sequence of values. Cells are individually typed; `dtype` unifies
/// them into the single column kind the polars side requires.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new<T>(name: T, values: Vec<Value>) -> Self
    where
        T: Into<String>,
    {
        Column {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Unified column kind, ignoring nulls. Integers and floats unify to
    /// `F64`; any other mix is an unsupported-type error naming the kinds
    /// observed.
    pub fn dtype(&self) -> FramixResult<ValueType> {
        let mut dtype = ValueType::Null;

        for v in &self.values {
            let next = ValueType::from(v);
            dtype = match (dtype, next) {
                (t, ValueType::Null) => t,
                (ValueType::Null, t) => t,
                (t, u) if t == u => t,
                (ValueType::I64, ValueType::F64) | (ValueType::F64, ValueType::I64) => {
                    ValueType::F64
                }
                (t, u) => {
                    return Err(FramixError::new_unsupported_type_error(format!(
                        "mixed column \"{}\" ({})",
                        self.name,
                        [t, u].iter().join(" and ")
                    )))
                }
            };
        }

        Ok(dtype)
    }

    /// Build the equivalent polars series. Always a fresh allocation.
    pub fn to_series(&self) -> FramixResult<PolarsSeries> {
        let name: PlSmallStr = self.name.as_str().into();

        let series = match self.dtype()? {
            ValueType::Bool => PolarsSeries::new(
                name,
                self.values
                    .iter()
                    .map(|v| match v {
                        Value::Bool(b) => Some(*b),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
            ValueType::I64 => PolarsSeries::new(
                name,
                self.values
                    .iter()
                    .map(|v| match v {
                        Value::I64(i) => Some(*i),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
            ValueType::F64 => PolarsSeries::new(
                name,
                self.values
                    .iter()
                    .map(|v| match v {
                        Value::F64(f) => Some(*f),
                        Value::I64(i) => Some(*i as f64),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
            ValueType::String => PolarsSeries::new(
                name,
                self.values
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
            ValueType::Null => PolarsSeries::new_null(name, self.values.len()),
        };

        Ok(series)
    }
}

// ================================================================================================
// Table
// ================================================================================================

/// An ordered collection of equal-length columns.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> FramixResult<Table> {
        if let Some(first) = columns.first() {
            let height = first.len();
            if let Some(ragged) = columns.iter().find(|c| c.len() != height) {
                return Err(FramixError::new_common_error(format!(
                    "column \"{}\" length {} mismatches column \"{}\" length {}",
                    ragged.name(),
                    ragged.len(),
                    first.name(),
                    height,
                )));
            }
        }

        Ok(Table { columns })
    }

    pub fn empty() -> Table {
        Table { columns: vec![] }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get_column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn dtypes(&self) -> FramixResult<Vec<ValueType>> {
        self.columns.iter().map(|c| c.dtype()).collect()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod test_table {
    use polars::prelude::DataType;

    use super::*;
    use crate::table;

    #[test]
    fn table_creation() {
        let tbl = table![
            "id" => [1i64, 2, 3],
            "name" => ["a", "b", "c"],
        ]
        .unwrap();

        assert_eq!(tbl.shape(), (3, 2));
        assert_eq!(tbl.get_column_names(), vec!["id", "name"]);
        assert_eq!(tbl.column("id").unwrap().values()[1], Value::I64(2));
    }

    #[test]
    fn ragged_columns_rejected() {
        let tbl = Table::new(vec![
            Column::new("a", vec![Value::I64(1), Value::I64(2)]),
            Column::new("b", vec![Value::I64(1)]),
        ]);

        assert!(tbl.is_err());
    }

    #[test]
    fn dtype_unification() {
        let col = Column::new("x", vec![Value::I64(1), Value::Null, Value::F64(0.5)]);
        assert_eq!(col.dtype().unwrap(), ValueType::F64);

        let col = Column::new("y", vec![Value::Null, Value::Null]);
        assert_eq!(col.dtype().unwrap(), ValueType::Null);

        let col = Column::new("z", vec![Value::Bool(true), Value::I64(1)]);
        assert!(matches!(
            col.dtype(),
            Err(FramixError::UnsupportedType(_))
        ));
    }

    #[test]
    fn column_to_series() {
        let col = Column::new("x", vec![Value::I64(1), Value::F64(2.5), Value::Null]);
        let s = col.to_series().unwrap();

        assert_eq!(s.dtype(), &DataType::Float64);
        assert_eq!(s.len(), 3);
        assert_eq!(s.null_count(), 1);
    }
}
