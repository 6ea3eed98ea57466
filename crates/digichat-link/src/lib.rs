//! Link
//!
//! Transport link to the remote conversational endpoint. Owns the
//! connection lifecycle: dialing, the typed inbound event stream, and
//! bounded automatic reconnection.
//!
//! # Architecture
//!
//! The crate follows a Sans-IO split. [`Link`] is a pure state machine
//! that tracks [`LinkState`], counts failed attempts against the
//! configured [`LinkConfig`], and decides whether a transport failure
//! warrants another automatic attempt. It performs no I/O and is fully
//! testable in isolation.
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides:
//! - [`transport::ConnectedLink`]: Link with WebSocket transport
//! - [`transport::connect`]: Dial an endpoint with automatic reconnection

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod event;
mod link;

#[cfg(feature = "transport")]
pub mod transport;

pub use config::{LinkConfig, TransportKind};
pub use event::LinkEvent;
pub use link::{FailureOutcome, Link, LinkState};
