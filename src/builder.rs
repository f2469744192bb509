//! Fluent builder for Poller construction.
//!
//! Provides a builder pattern interface for configuring what a [`Poller`]
//! waits for, how long it may block and how it treats an empty interest set.

use crate::event::EventCode;
use crate::poller::{EmptyInterest, Poller};
use crate::time::Timeout;

/// Builder for constructing [`Poller`] instances with a fluent API.
///
/// Defaults to an empty interest set, an infinite timeout and
/// [`EmptyInterest::Reject`].
///
/// # Example
/// ```ignore
/// let poller = PollerBuilder::new().send().connect().timeout_ms(1000).build();
/// let ready = poller.wait(&socket)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PollerBuilder {
    interest: EventCode,
    timeout: Timeout,
    empty_interest: EmptyInterest,
}

impl Default for PollerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PollerBuilder {
    /// Creates a new poller builder.
    pub fn new() -> Self {
        Self {
            interest: EventCode::empty(),
            timeout: Timeout::Infinite,
            empty_interest: EmptyInterest::Reject,
        }
    }

    /// Replaces the interest set.
    pub fn interest(mut self, interest: EventCode) -> Self {
        self.interest = interest;
        self
    }

    /// Adds [`EventCode::RECEIVE`] to the interest set.
    pub fn receive(mut self) -> Self {
        self.interest |= EventCode::RECEIVE;
        self
    }

    /// Adds [`EventCode::SEND`] to the interest set.
    pub fn send(mut self) -> Self {
        self.interest |= EventCode::SEND;
        self
    }

    /// Adds [`EventCode::ACCEPT`] to the interest set.
    pub fn accept(mut self) -> Self {
        self.interest |= EventCode::ACCEPT;
        self
    }

    /// Adds [`EventCode::CONNECT`] to the interest set.
    pub fn connect(mut self) -> Self {
        self.interest |= EventCode::CONNECT;
        self
    }

    /// Sets how long a wait may block.
    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout in milliseconds; negative blocks forever.
    pub fn timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.timeout = Timeout::from_millis(timeout_ms);
        self
    }

    /// Sets what a wait does when the interest set is empty.
    pub fn empty_interest(mut self, policy: EmptyInterest) -> Self {
        self.empty_interest = policy;
        self
    }

    /// Builds and returns the configured [`Poller`].
    pub fn build(self) -> Poller {
        Poller::new(self.interest, self.timeout, self.empty_interest)
    }
}
