//! Abstract readiness vocabulary.
//!
//! [`EventCode`] is the set of event kinds a caller can wait for. The OS only
//! knows "readable" and "writable"; ACCEPT and CONNECT are refinements of those
//! two that let callers say whether they are waiting on a listening socket or
//! on a connect in progress.

use bitflags::bitflags;

bitflags! {
    /// Event kinds a caller is interested in, or that became ready.
    ///
    /// # Example
    /// ```ignore
    /// let interest = EventCode::SEND | EventCode::CONNECT;
    /// assert!(interest.wants_write());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventCode: u32 {
        /// A non-blocking connect has completed.
        const CONNECT = 0x0001;
        /// A listening socket has a connection waiting to be accepted.
        const ACCEPT = 0x0002;
        /// Data can be received without blocking.
        const RECEIVE = 0x0004;
        /// Data can be sent without blocking.
        const SEND = 0x0008;
    }
}

impl EventCode {
    /// Returns `true` if this set needs the descriptor in the read set.
    pub fn wants_read(self) -> bool {
        self.intersects(EventCode::RECEIVE | EventCode::ACCEPT)
    }

    /// Returns `true` if this set needs the descriptor in the write set.
    pub fn wants_write(self) -> bool {
        self.intersects(EventCode::SEND | EventCode::CONNECT)
    }

    /// Rebuilds the ready set from raw OS readiness.
    ///
    /// RECEIVE is reported when `readable`, together with ACCEPT if `self`
    /// asked for it. SEND and CONNECT follow the same rule for `writable`.
    /// Directions that were not requested are ignored even if the OS flagged
    /// them.
    ///
    /// # Arguments
    /// * `readable` - The descriptor was found in the read set
    /// * `writable` - The descriptor was found in the write set
    ///
    /// # Returns
    /// The ready set, always contained in `self.widened()`
    pub fn ready(self, readable: bool, writable: bool) -> EventCode {
        let mut ready = EventCode::empty();

        if readable && self.wants_read() {
            ready |= EventCode::RECEIVE;
            if self.contains(EventCode::ACCEPT) {
                ready |= EventCode::ACCEPT;
            }
        }

        if writable && self.wants_write() {
            ready |= EventCode::SEND;
            if self.contains(EventCode::CONNECT) {
                ready |= EventCode::CONNECT;
            }
        }

        ready
    }

    /// The largest set [`ready`](Self::ready) can return for this interest.
    pub fn widened(self) -> EventCode {
        let mut widened = self;
        if self.wants_read() {
            widened |= EventCode::RECEIVE;
        }
        if self.wants_write() {
            widened |= EventCode::SEND;
        }
        widened
    }
}
