//! Link configuration.

/// Transport mechanisms the link is allowed to use.
///
/// The observed endpoint accepts both a persistent streaming channel and
/// a long-polling fallback. The WebSocket transport in this crate only
/// implements streaming; the polling variant is accepted in configuration
/// for contract compatibility and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Persistent bidirectional stream (WebSocket).
    Streaming,
    /// HTTP long-polling fallback.
    Polling,
}

/// Reconnection policy for a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Maximum consecutive failed connection attempts before the link
    /// gives up and enters [`LinkState::Failed`](crate::LinkState::Failed).
    pub max_attempts: u32,

    /// Transports the link may use, in preference order.
    pub transports: Vec<TransportKind>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self { max_attempts: 5, transports: vec![TransportKind::Streaming, TransportKind::Polling] }
    }
}
