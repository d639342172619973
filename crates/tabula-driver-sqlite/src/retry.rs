use rusqlite::ErrorCode;
use std::time::Duration;

/// Retry policy for statements that fail because another connection holds
/// a lock on the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRetry {
    /// Total attempts, including the first
    pub attempts: u32,

    /// Pause between attempts
    pub delay: Duration,
}

impl LockRetry {
    pub const DEFAULT_ATTEMPTS: u32 = 5;
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }
}

impl Default for LockRetry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// `SQLITE_BUSY` and `SQLITE_LOCKED` are the only retryable failures.
pub(crate) fn is_locked(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
    )
}
