//! Single-descriptor readiness polling on top of `select`.
//!
//! This crate blocks on one socket until it is ready for one of the requested
//! event kinds, the timeout expires, or an error occurs, and reports which
//! kinds fired.
//!
//! # Architecture
//!
//! - **Source**: Resolves a borrowed socket handle to a native descriptor
//! - **EventCode**: Receive/send/accept/connect flags and the aliasing rule
//! - **Timeout**: Millisecond timeouts, negative meaning forever
//! - **Poller**: Runs one `select` and decodes the outcome, checking the
//!   pending socket error before trusting readiness
//! - **PollerBuilder**: Fluent builder for poller configuration
//! - **PollError**: Invalid handle, select failure, pending socket error
//!
//! # Example
//!
//! ```ignore
//! use select_poller::{EventCode, PollError, wait};
//!
//! match wait(&stream, EventCode::SEND | EventCode::CONNECT, 1000) {
//!     Ok(ready) if ready.contains(EventCode::CONNECT) => println!("connected"),
//!     Ok(_) => println!("still connecting"),
//!     Err(PollError::ConnectionError(err)) => println!("connect failed: {err}"),
//!     Err(err) => return Err(err.into()),
//! }
//! ```

mod builder;
mod error;
mod event;
mod poller;
mod socket;
pub mod time;

pub use builder::PollerBuilder;
pub use error::PollError;
pub use event::EventCode;
pub use poller::{EmptyInterest, Poller, wait, wait_timeout};
pub use socket::{Descriptor, Source};
pub use time::Timeout;
