use super::Error;

#[derive(Debug)]
pub(super) struct ConnectionClosed;

impl std::error::Error for ConnectionClosed {}

impl core::fmt::Display for ConnectionClosed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection is not open")
    }
}

impl Error {
    /// Creates an error for an operation issued before `open` or after `close`.
    pub fn connection_closed() -> Error {
        Error::from(super::ErrorKind::ConnectionClosed(ConnectionClosed))
    }

    /// Returns `true` if this error is a closed-connection error.
    pub fn is_connection_closed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::ConnectionClosed(_)))
    }
}
