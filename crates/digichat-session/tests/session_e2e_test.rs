//! End-to-end exchange through the session state machine.
//!
//! Drives the full observed conversation flow: greeting, typed message,
//! reply, quick-reply round trip. Verifies the complete ordered action
//! stream and the resulting transcript.

use digichat_link::LinkEvent;
use digichat_proto::ClientEvent;
use digichat_session::{Message, Origin, Session, SessionAction, SessionEvent};

#[test]
fn full_exchange_with_quick_replies() {
    let mut session = Session::new();

    // Link comes up; endpoint greets first
    assert!(session.handle(SessionEvent::Link(LinkEvent::Connected)).is_empty());
    let actions = session.handle(SessionEvent::Link(LinkEvent::MessageReceived {
        text: Some("Hi! What is your name?".into()),
    }));
    assert_eq!(actions, vec![SessionAction::AppendMessage(Message::peer(
        "Hi! What is your name?"
    ))]);

    // User types "hello": transcript entry, outbound send, indicator up
    let actions = session.handle(SessionEvent::Submit { text: "hello".into() });
    assert_eq!(actions, vec![
        SessionAction::AppendMessage(Message::user("hello")),
        SessionAction::Send(ClientEvent::Message { text: "hello".into() }),
        SessionAction::ShowIndicator,
    ]);
    assert!(session.indicator_present());

    // Endpoint replies: indicator cleared before the reply appears
    let actions = session
        .handle(SessionEvent::Link(LinkEvent::MessageReceived { text: Some("hi!".into()) }));
    assert_eq!(actions, vec![
        SessionAction::ClearIndicator,
        SessionAction::AppendMessage(Message::peer("hi!")),
    ]);
    assert!(!session.indicator_present());

    // Endpoint offers quick replies
    let actions = session.handle(SessionEvent::Link(LinkEvent::SuggestionsReceived {
        options: vec!["Yes".into(), "No".into()],
    }));
    assert_eq!(actions, vec![SessionAction::ShowSuggestions {
        options: vec!["Yes".into(), "No".into()],
    }]);

    // User clicks "Yes": sent as if typed, controls removed
    let actions = session.handle(SessionEvent::SuggestionChosen { option: "Yes".into() });
    assert_eq!(actions, vec![
        SessionAction::AppendMessage(Message::user("Yes")),
        SessionAction::Send(ClientEvent::Message { text: "Yes".into() }),
        SessionAction::ShowIndicator,
        SessionAction::ClearSuggestions,
    ]);
    assert_eq!(session.active_suggestions(), None);

    let transcript: Vec<(Origin, &str)> =
        session.transcript().iter().map(|m| (m.origin, m.text.as_str())).collect();
    assert_eq!(transcript, [
        (Origin::Peer, "Hi! What is your name?"),
        (Origin::User, "hello"),
        (Origin::Peer, "hi!"),
        (Origin::User, "Yes"),
    ]);
}

#[test]
fn transport_fault_mid_conversation_degrades_gracefully() {
    let mut session = Session::new();

    let _ = session.handle(SessionEvent::Submit { text: "hello".into() });
    assert!(session.indicator_present());

    // Fault while a reply is pending: no transcript noise, indicator stays
    let actions = session
        .handle(SessionEvent::Link(LinkEvent::ConnectionError { detail: "reset".into() }));
    assert!(actions.is_empty());
    assert!(session.indicator_present());

    // Link recovers and the delayed reply lands normally
    assert!(session.handle(SessionEvent::Link(LinkEvent::Connected)).is_empty());
    let actions = session
        .handle(SessionEvent::Link(LinkEvent::MessageReceived { text: Some("back".into()) }));
    assert_eq!(actions, vec![
        SessionAction::ClearIndicator,
        SessionAction::AppendMessage(Message::peer("back")),
    ]);

    // A second fault exhausts the budget: user sees the notice
    let _ = session
        .handle(SessionEvent::Link(LinkEvent::ConnectionError { detail: "reset".into() }));
    let actions = session.handle(SessionEvent::Link(LinkEvent::ReconnectExhausted));
    assert_eq!(actions, vec![SessionAction::ShowDisconnectedNotice]);
}
