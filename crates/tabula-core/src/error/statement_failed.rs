use super::Error;

/// Error when the database fails to execute a statement.
///
/// This wraps errors from the underlying driver libraries:
/// - Connection errors (rusqlite, mysql_async)
/// - Syntax errors and constraint violations
/// - Transaction control errors (COMMIT, ROLLBACK)
/// - A lock retry that ran out of attempts
#[derive(Debug)]
pub(super) struct StatementFailed {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StatementFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StatementFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("statement failed: ")?;
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        // Our own errors already display their whole chain
        if self.wrapped().is_some() {
            return Ok(());
        }
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl StatementFailed {
    /// The wrapped error, when it is one of ours.
    pub(super) fn wrapped(&self) -> Option<&Error> {
        self.inner.downcast_ref::<Error>()
    }
}

impl Error {
    /// Creates an error from a statement execution failure.
    ///
    /// This is the preferred way to convert driver-specific errors (rusqlite,
    /// mysql_async) into tabula errors.
    pub fn statement_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::StatementFailed(StatementFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a statement failure.
    pub fn is_statement_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::StatementFailed(_)))
    }
}
