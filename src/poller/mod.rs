//! Single-descriptor readiness poller.
//!
//! Each wait is one complete transaction: resolve the handle, translate the
//! interest into read/write sets, run a single `select`, then decode the
//! outcome. Nothing is kept between calls.
//!
//! The platform back end is picked at build time:
//! - `unix`: `libc::select` over an `fd_set`
//! - `windows`: Winsock `select` over an `FD_SET`
//!
//! # Example
//!
//! ```ignore
//! use select_poller::{EventCode, wait};
//! use std::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:0")?;
//! let ready = wait(&listener, EventCode::RECEIVE | EventCode::ACCEPT, 1000)?;
//! if ready.is_empty() {
//!     println!("no connection within a second");
//! }
//! ```

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as sys;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use self::windows as sys;

use crate::builder::PollerBuilder;
use crate::error::PollError;
use crate::event::EventCode;
use crate::socket::{Source, resolve};
use crate::time::Timeout;

use log::{debug, trace};
use std::io;
use std::thread;

/// Raw per-direction outcome of one `select`.
pub(crate) struct Readiness {
    pub(crate) readable: bool,
    pub(crate) writable: bool,
    /// Flagged in the exception set. Only the Windows back end watches it.
    pub(crate) exceptional: bool,
}

/// What a wait does when the interest set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyInterest {
    /// Fail with [`PollError::EmptyInterest`] without blocking.
    #[default]
    Reject,
    /// Sleep for the timeout and report nothing ready. An infinite timeout
    /// never returns.
    Sleep,
}

/// A configured readiness wait.
///
/// A `Poller` holds only its configuration, never a descriptor, so the same
/// value can be used to wait on any number of sockets, one call at a time per
/// socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poller {
    interest: EventCode,
    timeout: Timeout,
    empty_interest: EmptyInterest,
}

impl Poller {
    pub(crate) fn new(interest: EventCode, timeout: Timeout, empty_interest: EmptyInterest) -> Self {
        Self {
            interest,
            timeout,
            empty_interest,
        }
    }

    /// Starts configuring a poller.
    pub fn builder() -> PollerBuilder {
        PollerBuilder::new()
    }

    /// Event kinds this poller waits for.
    pub fn interest(&self) -> EventCode {
        self.interest
    }

    /// How long each wait may block.
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    /// Policy applied when the interest set is empty.
    pub fn empty_interest(&self) -> EmptyInterest {
        self.empty_interest
    }

    /// Blocks until `socket` is ready for one of the configured event kinds.
    ///
    /// This method performs the following:
    /// 1. Resolves the handle to a descriptor, failing before any blocking
    /// 2. Runs a single `select` limited to the requested directions
    /// 3. Checks the pending socket error when the descriptor fired
    /// 4. Rebuilds the ready set, adding ACCEPT/CONNECT when requested
    ///
    /// # Arguments
    /// * `socket` - The handle to watch, borrowed for this call only
    ///
    /// # Returns
    /// The ready set, which is empty when the timeout expired, or a
    /// [`PollError`]. A descriptor that fired with a pending socket error is
    /// always reported as [`PollError::ConnectionError`], whichever direction
    /// fired. On Windows a failed connect is only seen through the exception
    /// set, which is watched for CONNECT interest alone.
    pub fn wait<S: Source + ?Sized>(&self, socket: &S) -> Result<EventCode, PollError> {
        let fd = resolve(socket)?;

        if self.interest.is_empty() {
            return match self.empty_interest {
                EmptyInterest::Reject => Err(PollError::EmptyInterest),
                EmptyInterest::Sleep => {
                    trace!("fd {fd}: empty interest, sleeping for {:?}", self.timeout);
                    sleep(self.timeout);
                    Ok(EventCode::empty())
                }
            };
        }

        trace!(
            "fd {fd}: waiting for {:?} with timeout {:?}",
            self.interest, self.timeout
        );

        let readiness = match sys::select(fd, self.interest, self.timeout) {
            Ok(Some(readiness)) => readiness,
            Ok(None) => {
                trace!("fd {fd}: timed out");
                return Ok(EventCode::empty());
            }
            Err(err) => {
                debug!("fd {fd}: select failed: {err}");
                return Err(PollError::MultiplexFailure(err));
            }
        };

        match sys::take_error(fd) {
            Ok(Some(err)) => {
                debug!("fd {fd}: pending socket error: {err}");
                return Err(PollError::ConnectionError(err));
            }
            Ok(None) if readiness.exceptional => {
                debug!("fd {fd}: exception set without a pending socket error");
                return Err(PollError::ConnectionError(io::Error::other(
                    "exceptional condition without a pending socket error",
                )));
            }
            Ok(None) => {}
            Err(err) => {
                debug!("fd {fd}: SO_ERROR query failed: {err}");
                return Err(PollError::ErrorQuery(err));
            }
        }

        let ready = self.interest.ready(readiness.readable, readiness.writable);
        trace!("fd {fd}: ready {ready:?}");

        Ok(ready)
    }
}

impl Default for Poller {
    fn default() -> Self {
        PollerBuilder::new().build()
    }
}

fn sleep(timeout: Timeout) {
    match timeout {
        Timeout::After(duration) => thread::sleep(duration),
        Timeout::Infinite => loop {
            thread::park();
        },
    }
}

/// Waits once for `socket` to become ready.
///
/// # Arguments
/// * `socket` - The handle to watch
/// * `interest` - Event kinds to wait for
/// * `timeout_ms` - Negative blocks forever, zero polls, positive bounds the wait
///
/// # Returns
/// The ready set (empty on timeout) or a [`PollError`]
///
/// # Example
/// ```ignore
/// let ready = wait(&stream, EventCode::SEND | EventCode::CONNECT, 1000)?;
/// assert!(ready.contains(EventCode::CONNECT));
/// ```
pub fn wait<S: Source + ?Sized>(
    socket: &S,
    interest: EventCode,
    timeout_ms: i64,
) -> Result<EventCode, PollError> {
    wait_timeout(socket, interest, Timeout::from_millis(timeout_ms))
}

/// Same as [`wait`], with a typed [`Timeout`].
pub fn wait_timeout<S: Source + ?Sized>(
    socket: &S,
    interest: EventCode,
    timeout: Timeout,
) -> Result<EventCode, PollError> {
    PollerBuilder::new()
        .interest(interest)
        .timeout(timeout)
        .build()
        .wait(socket)
}
