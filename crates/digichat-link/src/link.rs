//! Link state machine.
//!
//! Pure reconnection logic: no I/O, no timers. The transport layer (or a
//! test) feeds outcomes in and acts on the returned decisions.

use crate::config::LinkConfig;

/// Connection state of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// No connection and no attempt in progress.
    Disconnected,
    /// Initial connection attempt in progress.
    Connecting,
    /// Link established.
    Connected,
    /// Automatic reconnection attempt in progress.
    Reconnecting {
        /// Number of the attempt currently being made (1-based).
        attempt: u32,
    },
    /// Attempt budget exhausted. Terminal until a manual
    /// [`Link::connect`].
    Failed,
}

/// Decision after a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// The transport should schedule another automatic attempt.
    Retry {
        /// Number of the upcoming attempt (1-based).
        attempt: u32,
    },
    /// Budget exhausted; the link is now [`LinkState::Failed`].
    Exhausted,
}

/// Reconnection state machine for a single link.
///
/// Counts consecutive failed connection attempts against
/// [`LinkConfig::max_attempts`]. The counter resets on a successful
/// connection and on a manual [`connect`](Link::connect) call.
#[derive(Debug, Clone)]
pub struct Link {
    config: LinkConfig,
    state: LinkState,
    /// Consecutive failed attempts since the last success or manual
    /// connect.
    failures: u32,
}

impl Link {
    /// Create a new link with the given policy.
    pub fn new(config: LinkConfig) -> Self {
        Self { config, state: LinkState::Disconnected, failures: 0 }
    }

    /// Begin a manual connection attempt.
    ///
    /// Idempotent: returns `true` if the caller should dial, `false` if
    /// an attempt is already in progress or the link is connected.
    /// Resets the failure counter, so a link in [`LinkState::Failed`]
    /// regains its full attempt budget.
    pub fn connect(&mut self) -> bool {
        match self.state {
            LinkState::Disconnected | LinkState::Failed => {
                self.failures = 0;
                self.state = LinkState::Connecting;
                true
            },
            LinkState::Connecting | LinkState::Connected | LinkState::Reconnecting { .. } => false,
        }
    }

    /// Record a successful connection.
    pub fn established(&mut self) {
        self.failures = 0;
        self.state = LinkState::Connected;
    }

    /// Record a failed attempt or a dropped connection and decide what
    /// happens next.
    ///
    /// Failures while already [`LinkState::Failed`] or
    /// [`LinkState::Disconnected`] are ignored and reported as
    /// [`FailureOutcome::Exhausted`]; the transport must not dial again
    /// without a manual connect.
    pub fn connection_lost(&mut self) -> FailureOutcome {
        match self.state {
            LinkState::Connecting | LinkState::Connected | LinkState::Reconnecting { .. } => {
                self.failures += 1;
                if self.failures < self.config.max_attempts {
                    let attempt = self.failures + 1;
                    self.state = LinkState::Reconnecting { attempt };
                    FailureOutcome::Retry { attempt }
                } else {
                    self.state = LinkState::Failed;
                    FailureOutcome::Exhausted
                }
            },
            LinkState::Disconnected | LinkState::Failed => FailureOutcome::Exhausted,
        }
    }

    /// Whether outbound payloads may be handed to the transport.
    ///
    /// Sends while not connected are dropped by policy; the transport
    /// logs a warning and surfaces no error to the caller.
    pub fn can_send(&self) -> bool {
        self.state == LinkState::Connected
    }

    /// Current connection state.
    pub fn state(&self) -> LinkState {
        self.state
    }
}
