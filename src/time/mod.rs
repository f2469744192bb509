//! Time utilities for readiness waits.
//!
//! - [`timeout`]: the [`Timeout`] type and its millisecond conversion

pub mod timeout;

pub use timeout::Timeout;
