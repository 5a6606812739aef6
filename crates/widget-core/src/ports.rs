//! Port traits: the boundary between the widget core and the network.
//!
//! The traits and wire types live here in `widget-core` (pure Rust).
//! Implementations live in `widget-platform` (browser fetch adapters).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use widget_types::{
    Result,
    channel::Channel,
    seminar::{RegistrationReceipt, SeminarList, SeminarRegistration},
};

pub const CHAT_PATH: &str = "/api/chat";
pub const SEMINARS_UPCOMING_PATH: &str = "/api/seminars/upcoming";
pub const SEMINARS_REGISTER_PATH: &str = "/api/seminars/register";

// ─── Chat Port ───────────────────────────────────────────────

/// One user turn, as posted to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    pub channel: Channel,
    pub context: RequestContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub page: String,
}

/// Backend answer. Anything besides these two fields is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_sources: Option<Vec<String>>,
}

impl ChatReply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            knowledge_sources: None,
        }
    }
}

#[async_trait(?Send)]
pub trait ChatPort {
    /// Send one turn and wait for the reply. Exactly one call per user turn;
    /// implementations must not retry.
    async fn send(&self, req: ChatRequest) -> Result<ChatReply>;

    /// Endpoint this port posts to (for logging)
    fn endpoint(&self) -> &str;
}

// ─── Seminar Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait SeminarPort {
    async fn upcoming(&self, limit: u32) -> Result<SeminarList>;

    async fn register(&self, registration: &SeminarRegistration) -> Result<RegistrationReceipt>;
}
