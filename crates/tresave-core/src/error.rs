mod ambiguous_reference;
mod bad_descriptor;
mod no_primary_key;
mod no_updatable_columns;
mod shape;
mod table_not_found;

use ambiguous_reference::AmbiguousReference;
use bad_descriptor::BadDescriptor;
use no_primary_key::NoPrimaryKey;
use no_updatable_columns::NoUpdatableColumns;
use shape::ShapeMismatch;
use table_not_found::TableNotFound;

use std::sync::Arc;

/// An error raised while compiling or interpreting a save statement.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    AmbiguousReference(AmbiguousReference),
    BadDescriptor(BadDescriptor),
    NoPrimaryKey(NoPrimaryKey),
    NoUpdatableColumns(NoUpdatableColumns),
    ShapeMismatch(ShapeMismatch),
    TableNotFound(TableNotFound),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            AmbiguousReference(err) => core::fmt::Display::fmt(err, f),
            BadDescriptor(err) => core::fmt::Display::fmt(err, f),
            NoPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            NoUpdatableColumns(err) => core::fmt::Display::fmt(err, f),
            ShapeMismatch(err) => core::fmt::Display::fmt(err, f),
            TableNotFound(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Arc::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn table_not_found_display() {
        let err = Error::table_not_found("dept");
        assert!(err.is_table_not_found());
        assert_eq!(err.to_string(), "table not found: dept");
    }

    #[test]
    fn no_updatable_columns_display() {
        let err = Error::no_updatable_columns("emp");
        assert!(err.is_no_updatable_columns());
        assert_eq!(err.to_string(), "no updatable columns for table emp");
    }

    #[test]
    fn ambiguous_reference_display() {
        let err = Error::ambiguous_reference("multiple references from emp to dept");
        assert!(err.is_ambiguous_reference());
        assert_eq!(
            err.to_string(),
            "ambiguous reference: multiple references from emp to dept"
        );
    }

    #[test]
    fn no_primary_key_display() {
        let err = Error::no_primary_key("car_usage");
        assert!(err.is_no_primary_key());
        assert_eq!(
            err.to_string(),
            "table car_usage has no single-column primary key"
        );
    }

    #[test]
    fn bad_descriptor_display() {
        let err = Error::bad_descriptor("dept[");
        assert!(err.is_bad_descriptor());
        assert_eq!(err.to_string(), "malformed save descriptor: `dept[`");
    }

    #[test]
    fn shape_display() {
        let err = Error::shape("expected a sequence at `emp`");
        assert!(err.is_shape());
        assert_eq!(
            err.to_string(),
            "unexpected value shape: expected a sequence at `emp`"
        );
    }
}
