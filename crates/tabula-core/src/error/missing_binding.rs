use super::Error;

/// Error when a CRUD call cannot resolve its target table.
///
/// This occurs when:
/// - The target table is omitted while zero or several tables are bound
/// - A positional insert targets a table that was never bound
/// - A table is bound without a schema and does not exist yet
#[derive(Debug)]
pub(super) struct MissingBinding {
    message: Box<str>,
}

impl std::error::Error for MissingBinding {}

impl core::fmt::Display for MissingBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing binding: {}", self.message)
    }
}

impl Error {
    /// Creates a missing binding error.
    pub fn missing_binding(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingBinding(MissingBinding {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing binding error.
    pub fn is_missing_binding(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::MissingBinding(_)))
    }
}
