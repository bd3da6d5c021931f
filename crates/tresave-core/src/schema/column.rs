use super::Type;

/// A table column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// The name of the column
    pub name: String,

    /// The column type
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,
}
