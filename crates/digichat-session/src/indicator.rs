//! Typing indicator state machine.

/// Single-slot "peer is composing" marker.
///
/// At most one indicator exists at any time; redundant transitions are
/// no-ops, not errors. There is no timeout-based auto-clear: the marker
/// stays until the next peer reply arrives.
#[derive(Debug, Clone, Default)]
pub struct TypingIndicator {
    present: bool,
}

impl TypingIndicator {
    /// Create an absent indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition Absent -> Present.
    ///
    /// Returns `true` if the transition happened, `false` if the
    /// indicator was already present.
    pub fn show(&mut self) -> bool {
        let transitioned = !self.present;
        self.present = true;
        transitioned
    }

    /// Transition Present -> Absent.
    ///
    /// Returns `true` if the transition happened, `false` if the
    /// indicator was already absent.
    pub fn clear(&mut self) -> bool {
        let transitioned = self.present;
        self.present = false;
        transitioned
    }

    /// Whether the indicator is currently displayed.
    pub fn is_present(&self) -> bool {
        self.present
    }
}
