//! Session input events.
//!
//! This module defines [`SessionEvent`], the set of inputs that drive
//! the [`crate::Session`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (submitting text, choosing a quick reply).
//! - Link notifications forwarded from the transport, in arrival order.

use digichat_link::LinkEvent;

/// Events processed by the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// User submitted text from the input field.
    Submit {
        /// Raw input text; whitespace-only input is rejected silently.
        text: String,
    },

    /// User activated a quick-reply control.
    SuggestionChosen {
        /// Label of the chosen option.
        option: String,
    },

    /// Notification from the transport link.
    Link(LinkEvent),
}
