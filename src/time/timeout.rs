//! Wait timeouts.
//!
//! A [`Timeout`] is either infinite or a bounded [`Duration`]. Integer
//! millisecond values follow the usual poller convention: negative blocks
//! forever, zero polls without blocking.
//!
//! # Example
//!
//! ```ignore
//! use select_poller::Timeout;
//! use std::time::Duration;
//!
//! assert_eq!(Timeout::from_millis(-1), Timeout::Infinite);
//! assert_eq!(Timeout::from_millis(1500).parts(), Some((1, 500_000)));
//! assert_eq!(Timeout::from(Duration::ZERO), Timeout::IMMEDIATE);
//! ```
use std::time::Duration;

/// How long a single wait may block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timeout {
    /// Block until the descriptor is ready or an error occurs.
    #[default]
    Infinite,
    /// Block for at most the given duration.
    After(Duration),
}

impl Timeout {
    /// Returns immediately if nothing is ready.
    pub const IMMEDIATE: Timeout = Timeout::After(Duration::ZERO);

    /// Converts a millisecond count; any negative value means [`Timeout::Infinite`].
    pub fn from_millis(timeout_ms: i64) -> Self {
        match u64::try_from(timeout_ms) {
            Ok(ms) => Timeout::After(Duration::from_millis(ms)),
            Err(_) => Timeout::Infinite,
        }
    }

    /// Splits a bounded timeout into whole seconds and remaining microseconds.
    ///
    /// # Returns
    /// `None` for [`Timeout::Infinite`], `Some((secs, micros))` otherwise
    pub fn parts(&self) -> Option<(u64, u32)> {
        match self {
            Timeout::Infinite => None,
            Timeout::After(duration) => Some((duration.as_secs(), duration.subsec_micros())),
        }
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Timeout::After(duration)
    }
}

impl From<Option<Duration>> for Timeout {
    fn from(duration: Option<Duration>) -> Self {
        duration.map_or(Timeout::Infinite, Timeout::After)
    }
}
