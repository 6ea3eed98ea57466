//! JSON event envelope.
//!
//! Typed representations of the `{event, data}` frames exchanged with the
//! endpoint, plus encode/decode helpers. Decoding is tolerant of a missing
//! `text` field on inbound messages; the session layer decides how to
//! degrade (the endpoint has been observed to emit empty payloads).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Envelope encode/decode errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Frame is not a valid event envelope.
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Events emitted by the client to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// User-submitted text.
    Message {
        /// Submitted text, already trimmed and nonempty.
        text: String,
    },
}

impl ClientEvent {
    /// Encode into a JSON frame.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Events emitted by the endpoint to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Peer reply text.
    Message {
        /// Reply text. `None` when the endpoint omitted the field.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// Quick-reply options offered by the peer.
    PromptButtons {
        /// Option labels, in presentation order.
        buttons: Vec<String>,
    },
}

impl ServerEvent {
    /// Decode from a JSON frame.
    pub fn decode(frame: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(frame)?)
    }
}
