use super::Record;
use crate::{Error, Result};

/// A dynamic value: a node of the hierarchical objects handed to save
/// compilation, and of the environments the execution-time callbacks
/// inspect.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// Null value
    #[default]
    Null,

    /// An ordered mapping of field names to values
    Record(Record),

    /// A sequence of values
    List(Vec<Value>),

    /// String value
    String(String),

    /// An array of bytes
    Bytes(Vec<u8>),

    /// Calendar date
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),

    /// Wall-clock time
    #[cfg(feature = "chrono")]
    Time(chrono::NaiveTime),

    /// Calendar date and wall-clock time
    #[cfg(feature = "chrono")]
    DateTime(chrono::NaiveDateTime),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Value {
        Value::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_record(self) -> Result<Record> {
        match self {
            Value::Record(record) => Ok(record),
            value => Err(Error::shape(format!("expected an object, found {value:?}"))),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Value::I64(v) => Ok(v),
            value => Err(Error::shape(format!("expected an integer, found {value:?}"))),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Value {
        Value::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Value {
        Value::I64(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Value {
        Value::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Value {
        Value::Bytes(src)
    }
}

impl From<Record> for Value {
    fn from(src: Record) -> Value {
        Value::Record(src)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Value {
        Value::List(src)
    }
}

impl From<Vec<Record>> for Value {
    fn from(src: Vec<Record>) -> Value {
        Value::List(src.into_iter().map(Value::Record).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
