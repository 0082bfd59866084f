//! Framix error type
//!
//! Errors originated by the bridge itself, plus transparent passthrough of
//! the underlying readers'/writers' errors.

use std::fmt::Display;

use thiserror::Error;

pub type FramixResult<T> = Result<T, FramixError>;

#[derive(Debug)]
pub enum CommonError {
    Str(&'static str),
    String(String),
}

impl Display for CommonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommonError::Str(v) => write!(f, "{:?}", v),
            CommonError::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<&'static str> for CommonError {
    fn from(v: &'static str) -> Self {
        CommonError::Str(v)
    }
}

impl From<String> for CommonError {
    fn from(v: String) -> Self {
        CommonError::String(v)
    }
}

#[derive(Error, Debug)]
pub enum FramixError {
    #[error("common error {0}")]
    Common(CommonError),

    #[error("unsupported type {0}, expected Table or DataFrame data")]
    UnsupportedType(String),

    #[error("unsupported option {0} for the {1} csv writer")]
    UnsupportedOption(String, &'static str),

    #[error("parse {0} into {1} error")]
    Parse(String, String),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FramixError {
    pub fn new_common_error<T>(msg: T) -> FramixError
    where
        T: Into<CommonError>,
    {
        FramixError::Common(msg.into())
    }

    pub fn new_unsupported_type_error<T>(observed: T) -> FramixError
    where
        T: Display,
    {
        FramixError::UnsupportedType(observed.to_string())
    }

    pub fn new_unsupported_option_error<T>(key: T, writer: &'static str) -> FramixError
    where
        T: Display,
    {
        FramixError::UnsupportedOption(key.to_string(), writer)
    }

    pub fn new_parse_error<T1, T2>(type1: T1, type2: T2) -> FramixError
    where
        T1: Display,
        T2: Display,
    {
        FramixError::Parse(type1.to_string(), type2.to_string())
    }
}
