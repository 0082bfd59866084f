//! Csv
//!
//! Reading and writing delimited text for both representations, plus the
//! option-vocabulary translation between them. Write options arrive in the
//! table writer's vocabulary (`sep`, `index`) and are translated only when
//! the target is a polars frame, whose writer speaks `separator` and has no
//! row-label concept at all.

pub mod reader;
pub mod writer;

use std::collections::BTreeMap;

use crate::{FramixError, FramixResult, Value};

/// Options applied natively by whichever reader is selected. No translation
/// happens on the read path.
#[derive(Debug, Clone, Default)]
pub struct CsvReadOptions {
    pub delimiter: Option<u8>,
    pub has_header: Option<bool>,
}

/// Caller-facing write options, in the table writer's vocabulary. `extras`
/// is the pass-through bag for representation-specific settings; its keys are
/// handed to the selected writer unchanged.
#[derive(Debug, Clone, Default)]
pub struct CsvWriteOptions {
    pub sep: Option<u8>,
    pub index: Option<bool>,
    pub extras: BTreeMap<String, Value>,
}

/// Write options as the polars frame writer understands them. There is no
/// `index` field: the concept does not exist on this side, which makes the
/// drop a compile-time fact rather than a runtime one.
#[derive(Debug, Clone, Default)]
pub struct FrameWriteOptions {
    pub separator: Option<u8>,
    pub extras: BTreeMap<String, Value>,
}

/// Translate caller options for a frame-targeted write:
/// `sep` is renamed to `separator`, `index` is dropped entirely, every other
/// key passes through unchanged.
///
/// A caller-supplied `separator` entry in `extras` wins over the renamed
/// `sep`, preserving the last-write-wins update order of the option map this
/// replaces.
pub fn translate_write_options(options: &CsvWriteOptions) -> FramixResult<FrameWriteOptions> {
    let mut separator = options.sep;
    let mut extras = options.extras.clone();

    if let Some(v) = extras.remove("separator") {
        separator = Some(separator_byte(&v)?);
    }

    Ok(FrameWriteOptions { separator, extras })
}

fn separator_byte(value: &Value) -> FramixResult<u8> {
    match value {
        Value::String(s) if s.len() == 1 => Ok(s.as_bytes()[0]),
        Value::I64(i) => {
            u8::try_from(*i).map_err(|_| FramixError::new_parse_error(i, "separator byte"))
        }
        v => Err(FramixError::new_parse_error(v, "separator byte")),
    }
}
