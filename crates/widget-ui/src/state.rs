//! Render projection of a session.
//! Rebuilt every frame from the session snapshot and the resolved channel
//! style; holds nothing the session doesn't already know.

use chrono::{DateTime, Local};
use widget_types::channel::Channel;
use widget_types::config::MountOptions;
use widget_types::message::{ChatMessage, Role};
use widget_types::session::Session;

use crate::presentation::{resolve, BubbleStyle, ChannelStyle};

/// Citations listed by name before collapsing into "+N more"
const CITATIONS_SHOWN: usize = 2;

/// Per-mount switches that affect rendering but not the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_sources: bool,
    pub show_toggle: bool,
    /// Replaces the channel's input placeholder
    pub placeholder: Option<String>,
}

impl From<&MountOptions> for ViewOptions {
    fn from(options: &MountOptions) -> Self {
        Self {
            show_sources: options.show_sources,
            show_toggle: options.show_channel_toggle,
            placeholder: options.placeholder.clone(),
        }
    }
}

/// One transcript bubble, ready to paint
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub role: Role,
    pub bubble: BubbleStyle,
    pub sender: Option<String>,
    pub text: String,
    pub time: Option<String>,
    pub citation: Option<String>,
}

impl RowView {
    pub fn align_right(&self) -> bool {
        self.role == Role::User
    }
}

/// Everything the chat panel draws for one frame
#[derive(Debug, Clone)]
pub struct WidgetView {
    pub style: ChannelStyle,
    pub rows: Vec<RowView>,
    /// Typing indicator while a reply is outstanding
    pub typing: bool,
    pub send_enabled: bool,
    pub send_label: &'static str,
    pub placeholder: String,
    /// Active channel when the toggle is shown
    pub toggle: Option<Channel>,
}

impl WidgetView {
    pub fn project(session: &Session, options: &ViewOptions, now: DateTime<Local>) -> Self {
        let style = resolve(session.channel, &session.page_context);
        let rows = session
            .transcript
            .iter()
            .map(|message| project_row(message, &style, options, now))
            .collect();

        Self {
            style,
            rows,
            typing: session.awaiting_reply,
            send_enabled: session.can_send(),
            send_label: style.send.label(session.awaiting_reply),
            placeholder: options
                .placeholder
                .clone()
                .unwrap_or_else(|| style.input.placeholder.to_string()),
            toggle: (options.show_toggle && session.toggle_enabled).then_some(session.channel),
        }
    }
}

fn project_row(
    message: &ChatMessage,
    style: &ChannelStyle,
    options: &ViewOptions,
    now: DateTime<Local>,
) -> RowView {
    let is_user = message.is_user();
    let sender = (style.transcript.sender_labels && !is_user).then(|| {
        if style.transcript.uppercase_senders {
            message.sender.to_uppercase()
        } else {
            message.sender.clone()
        }
    });
    RowView {
        role: message.role,
        bubble: *style.bubble(is_user),
        sender,
        text: message.text.clone(),
        time: style
            .transcript
            .time_labels
            .then(|| time_label(message.timestamp.as_deref(), now)),
        citation: if options.show_sources {
            citation_line(&message.sources)
        } else {
            None
        },
    }
}

/// `HH:MM` in local time. Unstamped or unparseable entries show the current
/// clock, the way a phone thread labels a message it just drew.
pub fn time_label(timestamp: Option<&str>, now: DateTime<Local>) -> String {
    let at = timestamp
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|ts| ts.with_timezone(&Local))
        .unwrap_or(now);
    at.format("%H:%M").to_string()
}

/// "Sources: a, b +N more"; `None` when there is nothing to cite.
pub fn citation_line(sources: &[String]) -> Option<String> {
    if sources.is_empty() {
        return None;
    }
    let named = sources
        .iter()
        .take(CITATIONS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let rest = sources.len().saturating_sub(CITATIONS_SHOWN);
    Some(if rest > 0 {
        format!("Sources: {named} +{rest} more")
    } else {
        format!("Sources: {named}")
    })
}
