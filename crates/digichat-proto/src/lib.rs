//! Proto
//!
//! Wire-level event model for the DigiChat protocol. Defines the typed
//! events exchanged with the remote conversational endpoint and their
//! JSON envelope encoding.
//!
//! # Wire format
//!
//! Every frame is a JSON object with an `event` discriminator and a
//! `data` payload, matching the endpoint's contract:
//!
//! ```json
//! {"event": "message", "data": {"text": "hello"}}
//! {"event": "prompt_buttons", "data": {"buttons": ["Yes", "No"]}}
//! ```
//!
//! # Components
//!
//! - [`ClientEvent`]: Events the client emits to the endpoint
//! - [`ServerEvent`]: Events the endpoint emits to the client
//! - [`ProtocolError`]: Envelope encode/decode failures

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod envelope;

pub use envelope::{ClientEvent, ProtocolError, ServerEvent};
