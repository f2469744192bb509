//! Socket handle resolution.
//!
//! The poller never owns a socket. It borrows anything implementing [`Source`]
//! for the duration of one wait and asks it for the native descriptor.

#[cfg(unix)]
use std::os::unix::io::{AsRawFd, RawFd};
#[cfg(windows)]
use std::os::windows::io::{AsRawSocket, RawSocket};

use crate::error::PollError;

/// Native descriptor type `select` operates on.
#[cfg(unix)]
pub type Descriptor = RawFd;

/// Native descriptor type `select` operates on.
#[cfg(windows)]
pub type Descriptor = RawSocket;

/// A socket handle that can be resolved to a native descriptor.
///
/// Implemented for every type exposing a raw descriptor, so standard library
/// sockets can be passed directly.
///
/// # Example
/// ```ignore
/// let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
/// let ready = select_poller::wait(&listener, EventCode::ACCEPT, 0)?;
/// ```
pub trait Source {
    /// Returns the native descriptor, or `None` if the handle is not usable.
    fn descriptor(&self) -> Option<Descriptor>;
}

#[cfg(unix)]
impl<T: AsRawFd + ?Sized> Source for T {
    fn descriptor(&self) -> Option<Descriptor> {
        let fd = self.as_raw_fd();
        (fd >= 0).then_some(fd)
    }
}

#[cfg(windows)]
impl<T: AsRawSocket + ?Sized> Source for T {
    fn descriptor(&self) -> Option<Descriptor> {
        let socket = self.as_raw_socket();
        (socket != windows_sys::Win32::Networking::WinSock::INVALID_SOCKET as RawSocket)
            .then_some(socket)
    }
}

/// Resolves `source` to a descriptor the platform `select` can watch.
pub(crate) fn resolve<S: Source + ?Sized>(source: &S) -> Result<Descriptor, PollError> {
    let descriptor = source.descriptor().ok_or(PollError::InvalidHandle)?;

    #[cfg(unix)]
    if descriptor as usize >= libc::FD_SETSIZE as usize {
        return Err(PollError::InvalidHandle);
    }

    Ok(descriptor)
}
