use super::{Column, ForeignKey, PrimaryKey};

/// A database table.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,

    /// Foreign keys owned by this table
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// Looks up a column by field name.
    pub fn col(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The single-column primary key, if the table has one.
    pub fn single_key(&self) -> Option<&str> {
        self.primary_key.single()
    }

    /// Foreign keys pointing at `parent`.
    pub fn refs_to<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a ForeignKey> + 'a {
        self.foreign_keys
            .iter()
            .filter(move |fk| fk.ref_table == parent)
    }

    /// The table referenced by the foreign key on exactly `cols`, if any.
    pub fn ref_table(&self, cols: &[&str]) -> Option<&str> {
        self.foreign_keys
            .iter()
            .find(|fk| {
                fk.cols.len() == cols.len()
                    && fk.cols.iter().zip(cols).all(|(a, b)| a.as_str() == *b)
            })
            .map(|fk| fk.ref_table.as_str())
    }
}
