//! Session
//!
//! Application layer for DigiChat: pure state machines that turn link
//! events and user input into an ordered stream of render and send
//! instructions, enabling deterministic testing with the same code that
//! runs against a live endpoint.
//!
//! # Components
//!
//! - [`Session`]: Orchestrates message causality (transcript, indicator,
//!   suggestions) and is the only component aware of message semantics
//! - [`TypingIndicator`]: Single-slot "peer is composing" state machine
//! - [`Suggestions`]: At-most-one active quick-reply set
//! - [`SessionEvent`]: Inputs fed into the session
//! - [`SessionAction`]: Instructions produced for the renderer/transport

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod event;
mod indicator;
mod session;
mod state;
mod suggestions;

pub use action::SessionAction;
pub use event::SessionEvent;
pub use indicator::TypingIndicator;
pub use session::{EMPTY_MESSAGE_PLACEHOLDER, Session};
pub use state::{Message, Origin};
pub use suggestions::Suggestions;
