use crate::event::EventCode;
use crate::poller::Readiness;
use crate::socket::Descriptor;
use crate::time::Timeout;

use std::io;
use std::mem;
use std::ptr;
use windows_sys::Win32::Networking::WinSock::{
    FD_SET, SO_ERROR, SOCKET, SOCKET_ERROR, SOL_SOCKET, TIMEVAL, WSAENOTSOCK, WSAGetLastError,
    getsockopt,
};

/// A Winsock descriptor set.
///
/// Winsock stores sets as a count plus an array of sockets rather than a
/// bitmap, so membership is a scan of the populated prefix.
pub(crate) struct FdSet(FD_SET);

impl FdSet {
    pub(crate) fn new() -> Self {
        // FD_SET is a count and an array of integers; all-zero is the empty set.
        let mut set = Self(unsafe { mem::zeroed() });
        set.clear();
        set
    }

    pub(crate) fn add(&mut self, socket: Descriptor) {
        let count = self.0.fd_count as usize;
        if self.contains(socket) || count >= self.0.fd_array.len() {
            return;
        }
        self.0.fd_array[count] = socket as SOCKET;
        self.0.fd_count += 1;
    }

    pub(crate) fn contains(&self, socket: Descriptor) -> bool {
        self.0.fd_array[..self.0.fd_count as usize].contains(&(socket as SOCKET))
    }

    pub(crate) fn clear(&mut self) {
        self.0.fd_count = 0;
    }

    fn with(socket: Descriptor) -> Self {
        let mut set = Self::new();
        set.add(socket);
        set
    }
}

fn last_error() -> io::Error {
    io::Error::from_raw_os_error(unsafe { WSAGetLastError() })
}

fn set_ptr(set: &mut Option<FdSet>) -> *mut FD_SET {
    set.as_mut().map_or(ptr::null_mut(), |set| &mut set.0 as *mut FD_SET)
}

/// Runs one `select` over `socket`.
///
/// A failed non-blocking connect is signalled through the exception set on
/// Windows, so CONNECT interest also watches that set. Plain SEND interest
/// leaves it out, since out-of-band data lands there too.
pub(crate) fn select(
    socket: Descriptor,
    interest: EventCode,
    timeout: Timeout,
) -> io::Result<Option<Readiness>> {
    let mut read_set = interest.wants_read().then(|| FdSet::with(socket));
    let mut write_set = interest.wants_write().then(|| FdSet::with(socket));
    let mut except_set = interest
        .contains(EventCode::CONNECT)
        .then(|| FdSet::with(socket));

    let tv = timeout.parts().map(|(secs, micros)| TIMEVAL {
        tv_sec: secs.min(i32::MAX as u64) as i32,
        tv_usec: micros as i32,
    });
    let tv_ptr = tv
        .as_ref()
        .map_or(ptr::null(), |tv| tv as *const TIMEVAL);

    // nfds is ignored by Winsock.
    let ret = unsafe {
        windows_sys::Win32::Networking::WinSock::select(
            0,
            set_ptr(&mut read_set),
            set_ptr(&mut write_set),
            set_ptr(&mut except_set),
            tv_ptr,
        )
    };

    if ret == SOCKET_ERROR {
        return Err(last_error());
    }

    if ret == 0 {
        return Ok(None);
    }

    Ok(Some(Readiness {
        readable: read_set.as_ref().is_some_and(|set| set.contains(socket)),
        writable: write_set.as_ref().is_some_and(|set| set.contains(socket)),
        exceptional: except_set.as_ref().is_some_and(|set| set.contains(socket)),
    }))
}

/// Reads and clears `SO_ERROR`.
pub(crate) fn take_error(socket: Descriptor) -> io::Result<Option<io::Error>> {
    let mut code: i32 = 0;
    let mut len = mem::size_of::<i32>() as i32;

    let ret = unsafe {
        getsockopt(
            socket as SOCKET,
            SOL_SOCKET as i32,
            SO_ERROR as i32,
            &mut code as *mut i32 as *mut u8,
            &mut len,
        )
    };

    if ret == SOCKET_ERROR {
        let err = last_error();
        if err.raw_os_error() == Some(WSAENOTSOCK as i32) {
            return Ok(None);
        }
        return Err(err);
    }

    Ok((code != 0).then(|| io::Error::from_raw_os_error(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fd_set_tracks_membership() {
        let mut set = FdSet::new();
        assert!(!set.contains(300));

        set.add(300);
        set.add(300);
        assert!(set.contains(300));
        assert!(!set.contains(301));
        assert_eq!(set.0.fd_count, 1);

        set.clear();
        assert!(!set.contains(300));
    }

    fn connected_pair() -> (std::net::TcpStream, std::net::TcpStream) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let client = std::net::TcpStream::connect(addr).expect("connect");
        let (server, _peer) = listener.accept().expect("accept");
        (client, server)
    }

    #[test]
    fn send_interest_does_not_watch_exception_set() {
        use std::os::windows::io::AsRawSocket;

        let (client, server) = connected_pair();
        socket2::SockRef::from(&server)
            .send_out_of_band(b"!")
            .expect("send_out_of_band");
        std::thread::sleep(std::time::Duration::from_millis(50));

        let readiness = select(client.as_raw_socket(), EventCode::SEND, Timeout::IMMEDIATE)
            .expect("select")
            .expect("writable");

        assert!(readiness.writable);
        assert!(!readiness.exceptional);
    }

    #[test]
    fn take_error_on_non_socket_is_none() {
        use std::os::windows::io::AsRawHandle;

        let _winsock = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let file = std::fs::File::open(std::env::current_exe().expect("current exe"))
            .expect("open file");

        let pending = take_error(file.as_raw_handle() as Descriptor).expect("take_error");

        assert!(pending.is_none());
    }
}
