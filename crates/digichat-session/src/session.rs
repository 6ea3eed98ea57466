//! Session state machine.
//!
//! The `Session` is the top-level state machine that orchestrates
//! message causality: it turns user input and link events into an
//! ordered list of [`SessionAction`]s for the runtime to execute.
//!
//! This is a pure state machine: no I/O dependencies, fully testable in
//! isolation. Event ordering is preserved exactly; each event is
//! processed to completion before the next.

use digichat_link::LinkEvent;
use digichat_proto::ClientEvent;

use crate::{Message, SessionAction, SessionEvent, Suggestions, TypingIndicator};

/// Transcript text rendered when the peer sends a message with no text.
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "Empty message received";

/// Session state machine.
///
/// Owns the transcript, the typing indicator slot, and the active
/// suggestion set. The single-slot invariants are enforced entirely by
/// the no-op-on-already-set semantics of the component machines; no
/// other actor mutates them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    transcript: Vec<Message>,
    indicator: TypingIndicator,
    suggestions: Suggestions,
}

impl Session {
    /// Create a session with an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an event and return actions, in execution order.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        match event {
            SessionEvent::Submit { text } => self.submit(&text),

            SessionEvent::SuggestionChosen { option } => {
                if !self.suggestions.select(&option) {
                    tracing::debug!(%option, "stale suggestion selection ignored");
                    return vec![];
                }
                let mut actions = self.submit(&option);
                actions.push(SessionAction::ClearSuggestions);
                actions
            },

            SessionEvent::Link(link_event) => self.handle_link_event(link_event),
        }
    }

    /// Send user text through the common path: transcript entry,
    /// outbound event, typing indicator.
    ///
    /// Whitespace-only input is rejected silently: no transcript entry,
    /// no network call. This is the sole input-validation rule.
    fn submit(&mut self, text: &str) -> Vec<SessionAction> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![];
        }

        let message = Message::user(trimmed);
        self.transcript.push(message.clone());

        let mut actions = vec![
            SessionAction::AppendMessage(message),
            SessionAction::Send(ClientEvent::Message { text: trimmed.to_owned() }),
        ];
        if self.indicator.show() {
            actions.push(SessionAction::ShowIndicator);
        }
        actions
    }

    fn handle_link_event(&mut self, event: LinkEvent) -> Vec<SessionAction> {
        match event {
            LinkEvent::Connected => {
                tracing::info!("connected to endpoint");
                vec![]
            },

            LinkEvent::ConnectionError { detail } => {
                // Log only: recovery is the link's own responsibility
                tracing::warn!(%detail, "connection error");
                vec![]
            },

            LinkEvent::MessageReceived { text } => {
                let mut actions = Vec::new();
                // Indicator must be gone before the reply appears
                if self.indicator.clear() {
                    actions.push(SessionAction::ClearIndicator);
                }

                let text = match text {
                    Some(text) if !text.is_empty() => text,
                    _ => EMPTY_MESSAGE_PLACEHOLDER.to_owned(),
                };
                let message = Message::peer(text);
                self.transcript.push(message.clone());
                actions.push(SessionAction::AppendMessage(message));
                actions
            },

            LinkEvent::SuggestionsReceived { options } => {
                let had_active = self.suggestions.active().is_some();
                if !self.suggestions.present(options.clone()) {
                    tracing::debug!("ignoring empty suggestion set");
                    return vec![];
                }

                let mut actions = Vec::new();
                if had_active {
                    actions.push(SessionAction::ClearSuggestions);
                }
                actions.push(SessionAction::ShowSuggestions { options });
                actions
            },

            LinkEvent::ReconnectExhausted => {
                tracing::warn!("link failed, manual reconnect required");
                vec![SessionAction::ShowDisconnectedNotice]
            },
        }
    }

    /// Ordered, append-only transcript.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether the typing indicator is currently displayed.
    pub fn indicator_present(&self) -> bool {
        self.indicator.is_present()
    }

    /// Currently active quick-reply options. `None` if no set is active.
    pub fn active_suggestions(&self) -> Option<&[String]> {
        self.suggestions.active()
    }
}
