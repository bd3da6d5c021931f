use super::Error;

/// Error when a value does not have the shape an operation expects, e.g.
/// an environment entry that must be an object or a sequence.
///
/// These errors surface at execution time, from the macro callbacks the
/// emitted statements rely on.
#[derive(Debug)]
pub(super) struct ShapeMismatch {
    pub(super) message: Box<str>,
}

impl std::error::Error for ShapeMismatch {}

impl core::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unexpected value shape: {}", self.message)
    }
}

impl Error {
    /// Creates a value-shape error.
    pub fn shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ShapeMismatch(ShapeMismatch {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error reports a value-shape mismatch.
    pub fn is_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ShapeMismatch(_))
    }
}
