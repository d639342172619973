use super::Error;

/// Error when an insert payload cannot produce a valid statement.
///
/// This occurs when:
/// - A named insert has no field with both a non-empty name and a non-null value
/// - A positional insert supplies a different number of values than the bound
///   table has fields
#[derive(Debug)]
pub(super) struct InvalidInsert {
    message: Box<str>,
}

impl std::error::Error for InvalidInsert {}

impl core::fmt::Display for InvalidInsert {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid insert: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid insert error.
    pub fn invalid_insert(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidInsert(InvalidInsert {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid insert error.
    pub fn is_invalid_insert(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidInsert(_)))
    }
}
