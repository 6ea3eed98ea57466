//! Session side-effects and render instructions.
//!
//! This module defines the [`SessionAction`] enum, which represents
//! instructions produced by the [`crate::Session`] state machine for the
//! runtime to execute, in order. Emission order is a contract: a
//! [`SessionAction::ClearIndicator`] always precedes the
//! [`SessionAction::AppendMessage`] for the peer reply that cleared it.

use digichat_proto::ClientEvent;

use crate::Message;

/// Actions produced by the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Send an event to the endpoint.
    Send(ClientEvent),

    /// Append a message to the rendered transcript.
    AppendMessage(Message),

    /// Render the "peer is composing" indicator.
    ShowIndicator,

    /// Remove the "peer is composing" indicator.
    ClearIndicator,

    /// Render a fresh quick-reply control group.
    ShowSuggestions {
        /// Option labels, in presentation order.
        options: Vec<String>,
    },

    /// Remove the active quick-reply controls.
    ClearSuggestions,

    /// Render a notice that the link is down and needs a manual
    /// reconnect.
    ShowDisconnectedNotice,
}
