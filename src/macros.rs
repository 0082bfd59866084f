//! Framix macros

/// impl From trait for `Value`
macro_rules! impl_value_from {
    (Option<$ftype:ty>, $val_var:ident) => {
        impl From<Option<$ftype>> for Value {
            fn from(ov: Option<$ftype>) -> Self {
                match ov {
                    Some(v) => $crate::Value::$val_var(v),
                    None => $crate::Value::Null,
                }
            }
        }
    };
    ($ftype:ty, $val_var:ident) => {
        impl From<$ftype> for Value {
            fn from(v: $ftype) -> Self {
                $crate::Value::$val_var(v)
            }
        }
    };
}

pub(crate) use impl_value_from;

/// impl TryFrom trait for `Value`
macro_rules! impl_try_from_value {
    ($val_var:ident, $ftype:ty) => {
        impl TryFrom<Value> for $ftype {
            type Error = FramixError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$val_var(v) => Ok(v),
                    other => Err(FramixError::new_parse_error(other, stringify!($ftype))),
                }
            }
        }
    };
}

pub(crate) use impl_try_from_value;

/// table creation macro
///
/// for instance:
/// ```rust
/// use framix::table;
///
/// let tbl = table![
///     "id" => [1i64, 2, 3],
///     "name" => ["a", "b", "c"],
/// ]
/// .unwrap();
/// ```
#[macro_export]
macro_rules! table {
    ($($col_name:expr => [$($cell:expr),* $(,)?]),+ $(,)*) => {{
        let columns = vec![
            $(
                $crate::Column::new($col_name, vec![$($crate::Value::from($cell)),*]),
            )+
        ];

        $crate::Table::new(columns)
    }};
}
