//! Property-based tests for the link state machine.
//!
//! Tests verify that the reconnection bound and terminal-failure
//! semantics hold under arbitrary sequences of transport outcomes.

use digichat_link::{FailureOutcome, Link, LinkConfig, LinkState};
use proptest::prelude::*;

/// Transport outcomes a link can observe.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    Connect,
    Established,
    Lost,
}

fn outcome_strategy() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        1 => Just(Outcome::Connect),
        2 => Just(Outcome::Established),
        3 => Just(Outcome::Lost),
    ]
}

proptest! {
    /// Consecutive failures never exceed the configured budget before
    /// the link gives up.
    #[test]
    fn prop_failure_streak_is_bounded(
        max_attempts in 1u32..8,
        outcomes in prop::collection::vec(outcome_strategy(), 0..100),
    ) {
        let mut link = Link::new(LinkConfig { max_attempts, ..LinkConfig::default() });
        link.connect();

        let mut streak = 0u32;
        for outcome in outcomes {
            match outcome {
                Outcome::Connect => {
                    if link.connect() {
                        streak = 0;
                    }
                },
                Outcome::Established => {
                    if link.state() != LinkState::Failed
                        && link.state() != LinkState::Disconnected
                    {
                        link.established();
                        streak = 0;
                    }
                },
                Outcome::Lost => {
                    let before_failed = link.state() == LinkState::Failed;
                    let result = link.connection_lost();
                    if !before_failed {
                        streak += 1;
                    }
                    prop_assert!(streak <= max_attempts);
                    if streak == max_attempts {
                        prop_assert_eq!(result, FailureOutcome::Exhausted);
                    }
                },
            }

            // Retry is never offered from the terminal state
            if link.state() == LinkState::Failed {
                let mut probe = link.clone();
                prop_assert_eq!(probe.connection_lost(), FailureOutcome::Exhausted);
                prop_assert_eq!(probe.state(), LinkState::Failed);
            }
        }
    }

    /// Sends are only permitted while connected.
    #[test]
    fn prop_can_send_implies_connected(
        outcomes in prop::collection::vec(outcome_strategy(), 0..50),
    ) {
        let mut link = Link::new(LinkConfig::default());
        for outcome in outcomes {
            match outcome {
                Outcome::Connect => {
                    let _ = link.connect();
                },
                Outcome::Established => link.established(),
                Outcome::Lost => {
                    let _ = link.connection_lost();
                },
            }
            prop_assert_eq!(link.can_send(), link.state() == LinkState::Connected);
        }
    }
}
