use std::io;

use thiserror::Error;

/// Failure of a single readiness wait.
///
/// A timeout is not an error: it is reported as an empty
/// [`EventCode`](crate::EventCode) set.
#[derive(Debug, Error)]
pub enum PollError {
    /// The socket handle did not resolve to a descriptor `select` can watch.
    #[error("socket handle does not resolve to a usable descriptor")]
    InvalidHandle,

    /// The interest set was empty and the poller is configured to reject it.
    #[error("interest set is empty")]
    EmptyInterest,

    /// `select` itself failed.
    #[error("readiness wait failed: {0}")]
    MultiplexFailure(#[source] io::Error),

    /// The descriptor became ready but carries a pending socket error.
    #[error("socket has a pending error: {0}")]
    ConnectionError(#[source] io::Error),

    /// Reading the pending socket error failed.
    #[error("failed to query pending socket error: {0}")]
    ErrorQuery(#[source] io::Error),
}

impl From<PollError> for io::Error {
    fn from(err: PollError) -> Self {
        match err {
            PollError::InvalidHandle | PollError::EmptyInterest => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            PollError::MultiplexFailure(source)
            | PollError::ConnectionError(source)
            | PollError::ErrorQuery(source) => source,
        }
    }
}
