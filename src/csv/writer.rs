//! CSV Writer
//!
//! Writing either representation to delimited text. Each writer applies its
//! own option vocabulary and rejects keys it does not know, the same way the
//! underlying libraries reject an unknown keyword.

use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;
use polars::io::SerWriter;
use polars::prelude::{CsvWriter, DataFrame};

use super::{CsvWriteOptions, FrameWriteOptions};
use crate::{FramixError, FramixResult, Table, Value};

/// Write a polars frame with polars' own writer. The translated option set
/// never contains a row-label key.
pub fn write_frame<P: AsRef<Path>>(
    df: &DataFrame,
    path: P,
    options: &FrameWriteOptions,
) -> FramixResult<()> {
    let file = File::create(path.as_ref())?;
    let mut wtr = CsvWriter::new(file);

    if let Some(sep) = options.separator {
        wtr = wtr.with_separator(sep);
    }

    for (key, value) in &options.extras {
        wtr = match (key.as_str(), value) {
            ("include_header", Value::Bool(v)) => wtr.include_header(*v),
            ("quote_char", Value::String(v)) if v.len() == 1 => {
                wtr.with_quote_char(v.as_bytes()[0])
            }
            ("null_value", Value::String(v)) => wtr.with_null_value(v.clone()),
            ("float_precision", Value::I64(v)) => wtr.with_float_precision(Some(*v as usize)),
            ("date_format", Value::String(v)) => wtr.with_date_format(Some(v.clone())),
            ("datetime_format", Value::String(v)) => wtr.with_datetime_format(Some(v.clone())),
            ("time_format", Value::String(v)) => wtr.with_time_format(Some(v.clone())),
            _ => return Err(FramixError::new_unsupported_option_error(key, "frame")),
        };
    }

    // CsvWriter::finish wants a mutable frame; the bridge never mutates its
    // input, so it serializes a clone.
    wtr.finish(&mut df.clone())?;

    Ok(())
}

/// Write a `Table`. Defaults follow the table writer's own conventions:
/// comma separator, header row on, and the positional row-label column
/// written unless `index` is set to false.
pub fn write_table<P: AsRef<Path>>(
    tbl: &Table,
    path: P,
    options: &CsvWriteOptions,
) -> FramixResult<()> {
    let mut builder = WriterBuilder::new();
    builder.delimiter(options.sep.unwrap_or(b','));

    let mut header = true;
    for (key, value) in &options.extras {
        match (key.as_str(), value) {
            ("header", Value::Bool(v)) => header = *v,
            ("quote_char", Value::String(v)) if v.len() == 1 => {
                builder.quote(v.as_bytes()[0]);
            }
            _ => return Err(FramixError::new_unsupported_option_error(key, "table")),
        }
    }

    let index = options.index.unwrap_or(true);
    let mut wtr = builder.from_path(path.as_ref())?;

    if header {
        let mut record = Vec::with_capacity(tbl.width() + 1);
        if index {
            record.push(String::new());
        }
        record.extend(tbl.get_column_names().iter().map(|n| n.to_string()));
        wtr.write_record(&record)?;
    }

    for row in 0..tbl.height() {
        let mut record = Vec::with_capacity(tbl.width() + 1);
        if index {
            record.push(row.to_string());
        }
        for col in tbl.columns() {
            record.push(fmt_cell(&col.values()[row]));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;

    Ok(())
}

fn fmt_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        // Debug keeps the trailing ".0" on integral floats
        Value::F64(v) => format!("{:?}", v),
        Value::String(v) => v.clone(),
    }
}

#[cfg(test)]
mod test_csv_writer {
    use super::*;
    use crate::table;

    #[test]
    fn table_writer_index_off() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let tbl = table![
            "id" => [1i64, 2],
            "name" => ["a", "b"],
        ]
        .unwrap();

        let options = CsvWriteOptions {
            index: Some(false),
            ..Default::default()
        };
        write_table(&tbl, &path, &options).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "id,name\n1,a\n2,b\n");
    }

    #[test]
    fn table_writer_defaults_keep_row_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let tbl = table!["x" => [0.5, 1.0]].unwrap();

        write_table(&tbl, &path, &CsvWriteOptions::default()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, ",x\n0,0.5\n1,1.0\n");
    }

    #[test]
    fn unknown_option_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let tbl = table!["x" => [1i64]].unwrap();

        let mut options = CsvWriteOptions::default();
        options
            .extras
            .insert("chunk_size".to_string(), Value::I64(1024));

        let err = write_table(&tbl, &path, &options).unwrap_err();
        assert!(matches!(err, FramixError::UnsupportedOption(_, "table")));
    }
}
