use super::Error;

/// Error when a table exists with a schema that does not match the one it is
/// being bound with.
///
/// Integer and real column types are tolerated as equal; every other
/// difference in field names, field types, field order, primary keys, or
/// not-null constraints is a conflict.
#[derive(Debug)]
pub(super) struct SchemaConflict {
    message: Box<str>,
}

impl std::error::Error for SchemaConflict {}

impl core::fmt::Display for SchemaConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema conflict: {}", self.message)
    }
}

impl Error {
    /// Creates a schema conflict error.
    pub fn schema_conflict(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaConflict(SchemaConflict {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema conflict.
    pub fn is_schema_conflict(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::SchemaConflict(_)))
    }
}
