use super::Error;

/// Error when an update compile produced no columns.
#[derive(Debug)]
pub(super) struct NoUpdatableColumns {
    pub(super) table: Box<str>,
}

impl std::error::Error for NoUpdatableColumns {}

impl core::fmt::Display for NoUpdatableColumns {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no updatable columns for table {}", self.table)
    }
}

impl Error {
    /// Creates a no-updatable-columns error.
    pub fn no_updatable_columns(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoUpdatableColumns(NoUpdatableColumns {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error reports an update with nothing to set.
    pub fn is_no_updatable_columns(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoUpdatableColumns(_))
    }
}
