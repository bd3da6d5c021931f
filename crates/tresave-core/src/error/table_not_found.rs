use super::Error;

/// Error when a descriptor's primary table has no catalog entry.
///
/// No meaningful statement can be generated for a table the metadata
/// catalog does not know about.
#[derive(Debug)]
pub(super) struct TableNotFound {
    pub(super) table: Box<str>,
}

impl std::error::Error for TableNotFound {}

impl core::fmt::Display for TableNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table not found: {}", self.table)
    }
}

impl Error {
    /// Creates a table-not-found error.
    pub fn table_not_found(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNotFound(TableNotFound {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error reports a missing catalog table.
    pub fn is_table_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TableNotFound(_))
    }
}
