use super::Error;

/// Error when a statement fails because the database file is locked by
/// another writer.
///
/// Only the SQLite driver produces this kind. Its statement executor retries
/// the statement a bounded number of times and escalates to
/// [`Error::statement_failed`] once the attempts are exhausted, so callers of
/// the CRUD API do not normally observe it.
#[derive(Debug)]
pub(super) struct LockedResource {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for LockedResource {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for LockedResource {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "resource locked: {}", self.inner)
    }
}

impl Error {
    /// Creates a locked-resource error wrapping the driver's failure.
    pub fn locked_resource(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::LockedResource(LockedResource {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a locked-resource error.
    pub fn is_locked_resource(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::LockedResource(_)))
    }
}
