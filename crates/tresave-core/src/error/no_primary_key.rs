use super::Error;

/// Error when an operation requires a single-column primary key and the
/// table's key is absent or composite.
#[derive(Debug)]
pub(super) struct NoPrimaryKey {
    pub(super) table: Box<str>,
}

impl std::error::Error for NoPrimaryKey {}

impl core::fmt::Display for NoPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table {} has no single-column primary key", self.table)
    }
}

impl Error {
    /// Creates a no-primary-key error.
    pub fn no_primary_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoPrimaryKey(NoPrimaryKey {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error reports a missing or composite key.
    pub fn is_no_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoPrimaryKey(_))
    }
}
