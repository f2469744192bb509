use crate::event::EventCode;
use crate::poller::Readiness;
use crate::socket::Descriptor;
use crate::time::Timeout;

use libc::{
    ENOTSOCK, FD_ISSET, FD_SET, FD_ZERO, SO_ERROR, SOL_SOCKET, c_int, c_void, fd_set, getsockopt,
    socklen_t, suseconds_t, time_t, timeval,
};
use std::io;
use std::mem::{self, MaybeUninit};
use std::ptr;

/// A `select` descriptor set.
pub(crate) struct FdSet(fd_set);

impl FdSet {
    pub(crate) fn new() -> Self {
        // fd_set is plain integer storage, so all-zero bytes are a valid value.
        let mut set = Self(unsafe { MaybeUninit::<fd_set>::zeroed().assume_init() });
        set.clear();
        set
    }

    /// Callers must have checked `fd` against `FD_SETSIZE`.
    pub(crate) fn add(&mut self, fd: Descriptor) {
        unsafe { FD_SET(fd, &mut self.0) };
    }

    pub(crate) fn contains(&self, fd: Descriptor) -> bool {
        unsafe { FD_ISSET(fd, &self.0) }
    }

    pub(crate) fn clear(&mut self) {
        unsafe { FD_ZERO(&mut self.0) };
    }

    fn with(fd: Descriptor) -> Self {
        let mut set = Self::new();
        set.add(fd);
        set
    }
}

fn set_ptr(set: &mut Option<FdSet>) -> *mut fd_set {
    set.as_mut().map_or(ptr::null_mut(), |set| &mut set.0 as *mut fd_set)
}

/// Runs one `select` over `fd`.
///
/// Only the directions `interest` asks for get a set; the others are passed
/// as null. Returns `Ok(None)` when the timeout expires.
pub(crate) fn select(
    fd: Descriptor,
    interest: EventCode,
    timeout: Timeout,
) -> io::Result<Option<Readiness>> {
    let mut read_set = interest.wants_read().then(|| FdSet::with(fd));
    let mut write_set = interest.wants_write().then(|| FdSet::with(fd));

    let mut tv = timeout.parts().map(|(secs, micros)| timeval {
        tv_sec: secs.min(time_t::MAX as u64) as time_t,
        tv_usec: micros as suseconds_t,
    });
    let tv_ptr = tv
        .as_mut()
        .map_or(ptr::null_mut(), |tv| tv as *mut timeval);

    let ret = unsafe {
        libc::select(
            fd + 1,
            set_ptr(&mut read_set),
            set_ptr(&mut write_set),
            ptr::null_mut(),
            tv_ptr,
        )
    };

    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    if ret == 0 {
        return Ok(None);
    }

    Ok(Some(Readiness {
        readable: read_set.as_ref().is_some_and(|set| set.contains(fd)),
        writable: write_set.as_ref().is_some_and(|set| set.contains(fd)),
        exceptional: false,
    }))
}

/// Reads and clears `SO_ERROR`.
///
/// A descriptor that is not a socket has no pending socket error.
pub(crate) fn take_error(fd: Descriptor) -> io::Result<Option<io::Error>> {
    let mut code: c_int = 0;
    let mut len = mem::size_of::<c_int>() as socklen_t;

    let ret = unsafe {
        getsockopt(
            fd,
            SOL_SOCKET,
            SO_ERROR,
            &mut code as *mut c_int as *mut c_void,
            &mut len,
        )
    };

    if ret < 0 {
        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(ENOTSOCK) {
            return Ok(None);
        }
        return Err(err);
    }

    Ok((code != 0).then(|| io::Error::from_raw_os_error(code)))
}
