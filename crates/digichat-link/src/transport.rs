//! WebSocket transport for the link.
//!
//! Provides [`ConnectedLink`] which handles WebSocket I/O for the event
//! stream. This is a thin layer that dials, forwards frames, and applies
//! the bounded reconnection decisions of the Sans-IO [`Link`] machine;
//! event translation aside, no protocol logic lives here.

use std::time::Duration;

use digichat_proto::{ClientEvent, ServerEvent};
use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream,
    tungstenite::{Message, client::IntoClientRequest},
};

use crate::{FailureOutcome, Link, LinkConfig, LinkEvent};

/// Base delay before the first automatic retry.
const BACKOFF_BASE_MS: u64 = 500;

/// Upper bound on the retry delay.
const BACKOFF_CAP_MS: u64 = 10_000;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint address could not be parsed.
    #[error("invalid endpoint address: {0}")]
    Address(String),
}

/// Handle to a connected link with WebSocket transport.
///
/// Outbound events are sent via [`to_endpoint`](Self::to_endpoint);
/// inbound [`LinkEvent`]s arrive on [`events`](Self::events) in wire
/// order. An internal task owns the socket and reconnects automatically
/// within the configured budget. Once the budget is exhausted the task
/// ends; a manual reconnect means calling [`connect`] again for a fresh
/// handle with a fresh attempt counter.
pub struct ConnectedLink {
    /// Send events to the endpoint.
    pub to_endpoint: mpsc::Sender<ClientEvent>,
    /// Receive link events, in arrival order.
    pub events: mpsc::Receiver<LinkEvent>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedLink {
    /// Stop the connection.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Dial a DigiChat endpoint over WebSocket.
///
/// Returns a [`ConnectedLink`] immediately; connection progress is
/// observed through the event stream ([`LinkEvent::Connected`],
/// [`LinkEvent::ConnectionError`], [`LinkEvent::ReconnectExhausted`]).
pub fn connect(endpoint: &str, config: LinkConfig) -> Result<ConnectedLink, TransportError> {
    endpoint
        .into_client_request()
        .map_err(|e| TransportError::Address(e.to_string()))?;

    let (to_endpoint_tx, to_endpoint_rx) = mpsc::channel::<ClientEvent>(32);
    let (events_tx, events_rx) = mpsc::channel::<LinkEvent>(32);

    let handle = tokio::spawn(run_link(endpoint.to_owned(), config, to_endpoint_rx, events_tx));

    Ok(ConnectedLink {
        to_endpoint: to_endpoint_tx,
        events: events_rx,
        abort_handle: handle.abort_handle(),
    })
}

/// How a connected session ended.
enum SessionEnd {
    /// Transport-level failure; reconnection may follow.
    Dropped(String),
    /// Consumer went away; the task should exit.
    Closed,
}

/// Run the link: dial, bridge frames, reconnect within budget.
///
/// Outbound events are serviced in every phase: bridged to the socket
/// while connected, discarded with a warning while dialing or backing
/// off. Nothing submitted while the link is down survives to the next
/// connection.
async fn run_link(
    endpoint: String,
    config: LinkConfig,
    mut outbound: mpsc::Receiver<ClientEvent>,
    events: mpsc::Sender<LinkEvent>,
) {
    let mut link = Link::new(config);
    if !link.connect() {
        return;
    }

    loop {
        let dialed = tokio::select! {
            dialed = tokio_tungstenite::connect_async(&endpoint) => dialed,
            () = discard_outbound(&mut outbound) => return,
        };

        match dialed {
            Ok((stream, _response)) => {
                link.established();
                tracing::info!(%endpoint, "link established");
                if events.send(LinkEvent::Connected).await.is_err() {
                    return;
                }

                match run_session(&link, stream, &mut outbound, &events).await {
                    SessionEnd::Dropped(detail) => {
                        tracing::warn!(%detail, "link dropped");
                        if events.send(LinkEvent::ConnectionError { detail }).await.is_err() {
                            return;
                        }
                    },
                    SessionEnd::Closed => return,
                }
            },
            Err(e) => {
                let detail = e.to_string();
                tracing::warn!(%detail, "connection attempt failed");
                if events.send(LinkEvent::ConnectionError { detail }).await.is_err() {
                    return;
                }
            },
        }

        match link.connection_lost() {
            FailureOutcome::Retry { attempt } => {
                tokio::select! {
                    () = tokio::time::sleep(backoff_delay(attempt)) => {},
                    () = discard_outbound(&mut outbound) => return,
                }
                tracing::info!(attempt, "reconnecting");
            },
            FailureOutcome::Exhausted => {
                tracing::warn!("reconnection attempts exhausted, link failed");
                let _ = events.send(LinkEvent::ReconnectExhausted).await;
                return;
            },
        }
    }
}

/// Bridge frames for one established connection until it ends.
async fn run_session(
    link: &Link,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    outbound: &mut mpsc::Receiver<ClientEvent>,
    events: &mpsc::Sender<LinkEvent>,
) -> SessionEnd {
    let (mut sink, mut source) = stream.split();

    loop {
        tokio::select! {
            maybe_event = outbound.recv() => match maybe_event {
                Some(event) if !link.can_send() => {
                    tracing::warn!(?event, "link not connected, dropping outbound event");
                },
                Some(event) => match event.encode() {
                    Ok(frame) => {
                        if let Err(e) = sink.send(Message::Text(frame.into())).await {
                            return SessionEnd::Dropped(format!("send failed: {e}"));
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "dropping unencodable outbound event");
                    },
                },
                None => return SessionEnd::Closed,
            },
            maybe_frame = source.next() => match maybe_frame {
                Some(Ok(frame)) => {
                    if let Some(event) = translate_frame(&frame)
                        && events.send(event).await.is_err()
                    {
                        return SessionEnd::Closed;
                    }
                },
                Some(Err(e)) => return SessionEnd::Dropped(format!("stream error: {e}")),
                None => return SessionEnd::Dropped("connection closed by endpoint".into()),
            },
        }
    }
}

/// Translate a WebSocket frame into a link event.
///
/// Malformed frames are logged and skipped; control frames are handled
/// by the WebSocket layer and carry no events.
fn translate_frame(frame: &Message) -> Option<LinkEvent> {
    let text = match frame {
        Message::Text(text) => text.as_str(),
        _ => return None,
    };

    match ServerEvent::decode(text) {
        Ok(ServerEvent::Message { text }) => Some(LinkEvent::MessageReceived { text }),
        Ok(ServerEvent::PromptButtons { buttons }) => {
            Some(LinkEvent::SuggestionsReceived { options: buttons })
        },
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed frame");
            None
        },
    }
}

/// Drop outbound events for as long as the link is not connected.
///
/// No queuing exists by policy: a send while disconnected is dropped
/// with a logged warning rather than buffered for the next connection.
/// Runs until cancelled by the surrounding `select!`; completes only
/// when the sender goes away, meaning the task should exit.
async fn discard_outbound(outbound: &mut mpsc::Receiver<ClientEvent>) {
    while let Some(event) = outbound.recv().await {
        tracing::warn!(?event, "link not connected, dropping outbound event");
    }
}

/// Exponential backoff delay before the given attempt (2-based: the
/// first automatic retry is attempt 2).
fn backoff_delay(attempt: u32) -> Duration {
    let exp = attempt.saturating_sub(2).min(16);
    Duration::from_millis((BACKOFF_BASE_MS << exp).min(BACKOFF_CAP_MS))
}
