use serde::{Deserialize, Serialize};
use crate::channel::Channel;

/// Events emitted by the exchange driver.
/// The app drains these each frame to decide when to repaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// A user turn was appended and a request is about to go out
    SendStarted { session_id: String },

    /// The backend answered and the reply was appended
    ReplyReceived { session_id: String, source_count: usize },

    /// The exchange failed and the fallback reply was appended
    ReplyFailed { session_id: String, reason: String },

    /// A reply arrived for a session that no longer exists
    ReplyDiscarded { session_id: String },

    /// The visitor switched channels through the toggle
    ChannelSwitched { from: Channel, to: Channel },
}
