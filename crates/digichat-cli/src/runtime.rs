//! Async runtime.
//!
//! Event loop that drives terminal I/O and coordinates between the
//! session state machine and the transport link. Uses `tokio::select!`
//! to handle stdin lines and link events concurrently; each event is
//! processed to completion before the next, preserving delivery order.

use digichat_link::{LinkConfig, LinkEvent, transport};
use digichat_session::{Session, SessionAction, SessionEvent};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::LineRenderer;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] transport::TransportError),
}

/// One input observed by the event loop.
enum Input {
    /// Line from stdin. `None` when stdin closed.
    Line(Option<String>),
    /// Event from the link. `None` when the link task ended.
    Event(Option<LinkEvent>),
}

/// Async runtime for the CLI client.
///
/// Owns the session state machine, the link handle, and the renderer.
/// A failed link is kept as `None`; a manual `/connect` dials a fresh
/// link with a fresh attempt budget while the session (and transcript)
/// carries on.
pub struct Runtime {
    endpoint: String,
    config: LinkConfig,
    session: Session,
    link: Option<transport::ConnectedLink>,
    renderer: LineRenderer,
}

impl Runtime {
    /// Dial the endpoint and build a runtime around the link.
    pub fn connect(endpoint: String, config: LinkConfig) -> Result<Self, RuntimeError> {
        let link = transport::connect(&endpoint, config.clone())?;
        Ok(Self {
            endpoint,
            config,
            session: Session::new(),
            link: Some(link),
            renderer: LineRenderer::new(),
        })
    }

    /// Run the main event loop until `/quit` or stdin closes.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let input = tokio::select! {
                maybe_line = lines.next_line() => Input::Line(maybe_line?),
                maybe_event = recv_link_event(&mut self.link) => Input::Event(maybe_event),
            };

            match input {
                Input::Line(None) => break,
                Input::Line(Some(line)) => {
                    if self.handle_line(line.trim())? {
                        break;
                    }
                },
                Input::Event(None) => {
                    // Link task ended (budget exhausted); stop polling it
                    self.link = None;
                },
                Input::Event(Some(event)) => {
                    let actions = self.session.handle(SessionEvent::Link(event));
                    self.execute(actions)?;
                },
            }
        }

        if let Some(link) = &self.link {
            link.stop();
        }
        Ok(())
    }

    /// Handle one line of user input. Returns `true` to quit.
    fn handle_line(&mut self, line: &str) -> Result<bool, RuntimeError> {
        match line {
            "" => return Ok(false),
            "/quit" | "/exit" => return Ok(true),
            "/connect" => {
                // Idempotent: a live link is left alone
                if self.link.is_none() {
                    self.link = Some(transport::connect(&self.endpoint, self.config.clone())?);
                }
                return Ok(false);
            },
            _ => {},
        }

        let event = match parse_selection(line) {
            Some(pick) => {
                let option = pick
                    .and_then(|index| self.session.active_suggestions().and_then(|o| o.get(index)));
                match option {
                    Some(option) => SessionEvent::SuggestionChosen { option: option.clone() },
                    None => {
                        // Stale, zero, or out-of-range pick; ignore like
                        // a dead button rather than sending it as text
                        tracing::debug!(%line, "no matching quick-reply option");
                        return Ok(false);
                    },
                }
            },
            None => SessionEvent::Submit { text: line.to_owned() },
        };

        let actions = self.session.handle(event);
        self.execute(actions)?;
        Ok(false)
    }

    /// Execute actions in order: sends go to the link, everything else
    /// to the renderer.
    fn execute(&mut self, actions: Vec<SessionAction>) -> Result<(), RuntimeError> {
        for action in actions {
            match action {
                SessionAction::Send(event) => {
                    let delivered = self
                        .link
                        .as_ref()
                        .is_some_and(|link| link.to_endpoint.try_send(event.clone()).is_ok());
                    if !delivered {
                        // Drop-with-warning policy: no buffering exists
                        tracing::warn!(?event, "link unavailable, dropping outbound event");
                    }
                },
                other => self.renderer.apply(&other)?,
            }
        }
        Ok(())
    }
}

/// Receive the next link event, or park forever when no link is alive.
async fn recv_link_event(link: &mut Option<transport::ConnectedLink>) -> Option<LinkEvent> {
    match link {
        Some(link) => link.events.recv().await,
        None => std::future::pending().await,
    }
}

/// Parse a `/N` quick-reply pick.
///
/// Returns `None` for input that is not selection-shaped (it goes to
/// the send path), `Some(None)` for a numeric pick with no valid index
/// (`/0`), and `Some(Some(index))` for a one-based pick.
fn parse_selection(line: &str) -> Option<Option<usize>> {
    let number: usize = line.strip_prefix('/')?.parse().ok()?;
    Some(number.checked_sub(1))
}
