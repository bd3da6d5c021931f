/// Column storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Bool,
    I64,
    F64,
    String,
    Bytes,
    Date,
    Time,
    DateTime,
}
