//! Link events.

/// Events the link emits to its consumer, in arrival order.
///
/// The session layer is the sole consumer. Events are never reordered:
/// a frame received before a disconnect is delivered before the
/// corresponding [`LinkEvent::ConnectionError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// Link established.
    Connected,

    /// A connection attempt failed or an established link dropped.
    ConnectionError {
        /// Human-readable failure description.
        detail: String,
    },

    /// Peer reply text. `None` when the frame carried no text.
    MessageReceived {
        /// Reply text as decoded from the wire.
        text: Option<String>,
    },

    /// Quick-reply options offered by the peer.
    SuggestionsReceived {
        /// Option labels, in presentation order.
        options: Vec<String>,
    },

    /// Automatic reconnection budget exhausted; the link is failed until
    /// a manual reconnect.
    ///
    /// The observed endpoint never announces this; the event exists so
    /// consumers can surface the failure instead of inferring it from
    /// silence.
    ReconnectExhausted,
}
