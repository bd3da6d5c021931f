use super::Error;

/// Error when the references linking a table to its parent cannot be
/// established.
///
/// This occurs when:
/// - More than one single-column foreign key points at the parent and the
///   descriptor did not pin one
/// - The descriptor pinned columns that are not foreign keys to the parent
/// - Only multi-column foreign keys exist, or none at all
#[derive(Debug)]
pub(super) struct AmbiguousReference {
    pub(super) message: Box<str>,
}

impl std::error::Error for AmbiguousReference {}

impl core::fmt::Display for AmbiguousReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "ambiguous reference: {}", self.message)
    }
}

impl Error {
    /// Creates an ambiguous-reference error.
    pub fn ambiguous_reference(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AmbiguousReference(AmbiguousReference {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error reports an unresolvable reference.
    pub fn is_ambiguous_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousReference(_))
    }
}
