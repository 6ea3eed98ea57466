//! Line-oriented renderer.
//!
//! Executes [`SessionAction`] render instructions by writing lines to
//! stdout. A line UI cannot retract output, so "clear" instructions for
//! the typing indicator and quick-reply controls print nothing: the
//! content that follows supersedes them, and selectability is enforced
//! by the session, not the screen.

use std::io::{self, Stdout, Write};

use digichat_session::{Message, Origin, SessionAction};

/// Display name for the remote peer.
const PEER_NAME: &str = "digi";

/// Typing indicator label, rendered as a peer line.
const TYPING_LABEL: &str = "Typing…";

/// Writes session render instructions as lines on stdout.
pub struct LineRenderer {
    out: Stdout,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRenderer {
    /// Create a renderer over stdout.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Execute one render instruction.
    pub fn apply(&mut self, action: &SessionAction) -> io::Result<()> {
        match action {
            SessionAction::AppendMessage(message) => self.message_line(message),
            SessionAction::ShowIndicator => {
                writeln!(self.out, "{PEER_NAME}> {TYPING_LABEL}")
            },
            SessionAction::ShowSuggestions { options } => {
                for (index, option) in options.iter().enumerate() {
                    writeln!(self.out, "  [/{}] {option}", index + 1)?;
                }
                writeln!(self.out, "(reply with /1../{} to pick an option)", options.len())
            },
            SessionAction::ShowDisconnectedNotice => {
                writeln!(self.out, "*** connection lost, type /connect to retry")
            },
            SessionAction::ClearIndicator
            | SessionAction::ClearSuggestions
            | SessionAction::Send(_) => Ok(()),
        }
    }

    fn message_line(&mut self, message: &Message) -> io::Result<()> {
        match message.origin {
            Origin::User => writeln!(self.out, "you> {}", message.text),
            Origin::Peer => writeln!(self.out, "{PEER_NAME}> {}", message.text),
        }
    }
}
