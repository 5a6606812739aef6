use serde::{Deserialize, Serialize};
use crate::channel::Channel;
use crate::message::ChatMessage;

const ID_RANDOM_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Runtime state of one mounted widget. Lives only as long as the mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub channel: Channel,
    pub page_context: String,
    pub transcript: Vec<ChatMessage>,
    pub pending_input: String,
    pub awaiting_reply: bool,
    /// Whether the host page enabled the channel toggle for this mount
    pub toggle_enabled: bool,
    /// Sender label for agent entries
    pub agent_name: String,
    pub timestamps: bool,
}

impl Session {
    /// An empty session. Use `widget_core::session::create_session` to get one
    /// seeded with a greeting.
    pub fn new(id: String, channel: Channel, page_context: impl Into<String>) -> Self {
        Self {
            id,
            channel,
            page_context: page_context.into(),
            transcript: Vec::new(),
            pending_input: String::new(),
            awaiting_reply: false,
            toggle_enabled: false,
            agent_name: crate::message::AGENT_SENDER.to_string(),
            timestamps: false,
        }
    }

    /// True when a send would be accepted right now.
    pub fn can_send(&self) -> bool {
        !self.awaiting_reply && !self.pending_input.trim().is_empty()
    }
}

/// Build an opaque session id: `<prefix>_<unix millis>_<9 base36 chars>`.
/// The time part orders ids across mounts, the random part (from a v4 UUID)
/// separates mounts created within the same millisecond.
pub fn generate_session_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut random = uuid::Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(ID_RANDOM_LEN);
    for _ in 0..ID_RANDOM_LEN {
        suffix.push(BASE36[(random % 36) as usize] as char);
        random /= 36;
    }
    format!("{}_{}_{}", prefix, millis, suffix)
}
