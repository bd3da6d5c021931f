/// A table's primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimaryKey {
    /// Columns composing the primary key
    pub cols: Vec<String>,
}

impl PrimaryKey {
    /// The key column when the key is single-column; `None` for absent or
    /// composite keys.
    pub fn single(&self) -> Option<&str> {
        match &self.cols[..] {
            [col] => Some(col),
            _ => None,
        }
    }
}
