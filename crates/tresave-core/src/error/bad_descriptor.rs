use super::Error;

/// Error when a save descriptor does not match the descriptor grammar
/// end to end.
#[derive(Debug)]
pub(super) struct BadDescriptor {
    pub(super) descriptor: Box<str>,
}

impl std::error::Error for BadDescriptor {}

impl core::fmt::Display for BadDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed save descriptor: `{}`", self.descriptor)
    }
}

impl Error {
    /// Creates a bad-descriptor error.
    pub fn bad_descriptor(descriptor: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::BadDescriptor(BadDescriptor {
            descriptor: descriptor.into().into(),
        }))
    }

    /// Returns `true` if this error reports a malformed descriptor.
    pub fn is_bad_descriptor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::BadDescriptor(_))
    }
}
