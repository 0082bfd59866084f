//! CSV Reader
//!
//! Reading CSV files into either representation. Options are applied
//! natively by the selected reader; I/O and parse errors surface untouched.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use polars::io::SerReader;
use polars::prelude::{CsvReadOptions as PolarsCsvReadOptions, DataFrame};

use super::CsvReadOptions;
use crate::{Column, FramixResult, Table, Value, ValueType};

/// Read a CSV file with polars' own reader.
pub fn read_frame<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> FramixResult<DataFrame> {
    let file = File::open(path.as_ref())?;

    let df = PolarsCsvReadOptions::default()
        .with_has_header(options.has_header.unwrap_or(true))
        .map_parse_options(|po| po.with_separator(options.delimiter.unwrap_or(b',')))
        .into_reader_with_file_handle(file)
        .finish()?;

    Ok(df)
}

/// Read a CSV file into a `Table`, inferring one dtype per column.
/// A headerless file gets positional column names.
pub fn read_table<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> FramixResult<Table> {
    let has_header = options.has_header.unwrap_or(true);

    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter.unwrap_or(b','))
        .has_headers(has_header)
        .from_path(path.as_ref())?;

    let mut names: Vec<String> = if has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        vec![]
    };
    let mut cells: Vec<Vec<Option<String>>> = names.iter().map(|_| vec![]).collect();

    for record in rdr.records() {
        let record = record?;
        if names.is_empty() {
            names = (0..record.len()).map(|i| i.to_string()).collect();
            cells = names.iter().map(|_| vec![]).collect();
        }
        for (i, field) in record.iter().enumerate() {
            if let Some(col) = cells.get_mut(i) {
                col.push((!field.is_empty()).then(|| field.to_string()));
            }
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| infer_column(name, raw))
        .collect();

    Table::new(columns)
}

/// Column-level inference: all-i64, widened to f64 when floats appear,
/// all-bool, otherwise the raw strings are kept as-is. Empty cells are null.
fn infer_column(name: String, raw: Vec<Option<String>>) -> Column {
    let mut dtype = ValueType::Null;

    for cell in raw.iter().flatten() {
        let next = ValueType::from(&Value::parse_str(cell));
        dtype = match (dtype, next) {
            (ValueType::Null, t) => t,
            (t, u) if t == u => t,
            (ValueType::I64, ValueType::F64) | (ValueType::F64, ValueType::I64) => ValueType::F64,
            _ => ValueType::String,
        };
        if dtype == ValueType::String {
            break;
        }
    }

    let values = raw
        .into_iter()
        .map(|cell| match cell {
            None => Value::Null,
            Some(s) => match dtype {
                ValueType::String => Value::String(s),
                _ => Value::parse_str(&s),
            },
        })
        .collect();

    Column::new(name, values)
}

#[cfg(test)]
mod test_csv_reader {
    use super::*;

    fn raw(cells: &[&str]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|c| (!c.is_empty()).then(|| c.to_string()))
            .collect()
    }

    #[test]
    fn integer_column() {
        let col = infer_column("x".to_string(), raw(&["1", "2", ""]));
        assert_eq!(
            col.values(),
            &[Value::I64(1), Value::I64(2), Value::Null]
        );
    }

    #[test]
    fn widened_to_float() {
        let col = infer_column("x".to_string(), raw(&["1", "2.5"]));
        assert_eq!(col.dtype().unwrap(), ValueType::F64);
    }

    #[test]
    fn mixed_falls_back_to_string() {
        let col = infer_column("x".to_string(), raw(&["1", "abc", "True"]));
        assert_eq!(
            col.values(),
            &[
                Value::String("1".to_string()),
                Value::String("abc".to_string()),
                Value::String("True".to_string()),
            ]
        );
    }

    #[test]
    fn bool_column() {
        let col = infer_column("x".to_string(), raw(&["true", "False"]));
        assert_eq!(col.values(), &[Value::Bool(true), Value::Bool(false)]);
    }
}
