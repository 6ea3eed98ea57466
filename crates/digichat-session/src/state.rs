//! Observable session state types.
//!
//! These structures serve as the view model for the transcript: the
//! subset of session state a renderer needs, with no knowledge of the
//! wire protocol underneath.

/// Which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// This client.
    User,
    /// The remote endpoint.
    Peer,
}

/// A transcript entry. Immutable once created; the transcript is
/// append-only and lives as long as the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Display text.
    pub text: String,
    /// Side that produced the message.
    pub origin: Origin,
}

impl Message {
    /// Create a user-originated message.
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), origin: Origin::User }
    }

    /// Create a peer-originated message.
    pub fn peer(text: impl Into<String>) -> Self {
        Self { text: text.into(), origin: Origin::Peer }
    }
}
