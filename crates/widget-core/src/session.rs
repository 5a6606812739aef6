//! Session manager: pure state transitions for one widget mount.
//!
//! Every operation takes a `Session` by value and returns the next one.
//! Nothing here touches the network; the exchange driver does that.

use widget_types::{
    Result,
    channel::Channel,
    config::MountOptions,
    message::ChatMessage,
    session::{Session, generate_session_id},
};
use crate::ports::ChatReply;

/// Create a session for a fresh mount, seeded with the agent greeting.
pub fn create_session(options: &MountOptions) -> Session {
    let mut session = Session::new(
        generate_session_id(&options.session_prefix),
        options.initial_channel(),
        options.page_context.clone(),
    );
    session.toggle_enabled = options.show_channel_toggle;
    session.agent_name = options.agent_name.clone();
    session.timestamps = options.timestamps;

    let greeting = ChatMessage::agent(options.greeting_sender(), options.initial_message.clone());
    session.transcript.push(stamp_if_enabled(session.timestamps, greeting));
    session
}

/// Replace the draft. Called on every keystroke.
pub fn set_draft(mut session: Session, text: impl Into<String>) -> Session {
    session.pending_input = text.into();
    session
}

/// Move the draft into the transcript and mark a reply as outstanding.
///
/// Returns the text to dispatch, or `None` (with the session untouched) when
/// the draft is blank or a reply is already pending.
pub fn begin_send(mut session: Session) -> (Session, Option<String>) {
    if !session.can_send() {
        return (session, None);
    }

    let text = std::mem::take(&mut session.pending_input);
    let entry = ChatMessage::user(text.clone());
    session.transcript.push(stamp_if_enabled(session.timestamps, entry));
    session.awaiting_reply = true;
    (session, Some(text))
}

/// Append the outcome of an exchange. Always clears `awaiting_reply`.
pub fn complete_send(mut session: Session, result: Result<ChatReply>) -> Session {
    let entry = match result {
        Ok(reply) => ChatMessage::agent(session.agent_name.clone(), reply.message)
            .with_sources(reply.knowledge_sources.unwrap_or_default()),
        Err(e) => {
            log::error!("Chat exchange failed for session {}: {}", session.id, e);
            ChatMessage::fallback(session.agent_name.clone())
        }
    };
    session.transcript.push(stamp_if_enabled(session.timestamps, entry));
    session.awaiting_reply = false;
    session
}

/// Switch the simulated channel. Only honoured when the mount enabled the
/// toggle and the target is one of the toggle channels.
pub fn switch_channel(mut session: Session, channel: Channel) -> Session {
    if !session.toggle_enabled {
        log::warn!(
            "Channel switch to {} refused: toggle not enabled for session {}",
            channel,
            session.id
        );
        return session;
    }
    if !channel.is_toggleable() {
        log::warn!("Channel {} cannot be selected at runtime", channel);
        return session;
    }
    session.channel = channel;
    session
}

fn stamp_if_enabled(timestamps: bool, entry: ChatMessage) -> ChatMessage {
    if timestamps {
        entry.stamped()
    } else {
        entry
    }
}
