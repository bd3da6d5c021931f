/// A foreign key from one table to another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKey {
    /// Referencing columns in the owning table
    pub cols: Vec<String>,

    /// The referenced table
    pub ref_table: String,

    /// Referenced columns, typically the target's primary key
    pub ref_cols: Vec<String>,
}
