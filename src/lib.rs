//! Framix
//!
//! A compatibility bridge between two in-memory columnar table
//! representations: the crate-owned, value-typed [`Table`] and the polars
//! [`DataFrame`](polars::prelude::DataFrame). Every operation is a direct,
//! synchronous conversion or a parameter-translation wrapper around one of
//! the two underlying CSV stacks; the bridge holds no state, no handles and
//! no concurrency of its own.

pub mod bridge;
pub mod csv;
pub mod error;
pub(crate) mod macros;
pub mod table;
pub mod value;

pub use bridge::*;
pub use self::csv::{CsvReadOptions, CsvWriteOptions, FrameWriteOptions};
pub use error::*;
pub use table::*;
pub use value::*;

pub use polars;
pub(crate) use macros::*;
