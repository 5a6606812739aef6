use serde::{Deserialize, Serialize};

/// Sender label used for visitor-authored entries
pub const USER_SENDER: &str = "You";

/// Default sender label for agent entries
pub const AGENT_SENDER: &str = "AI Agent";

/// Shown in place of a reply whenever the backend exchange fails.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm experiencing technical difficulties. \
Please try again or contact our support team.";

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub sender: String,
    pub text: String,
    /// RFC 3339, only recorded when the mount asks for timestamps
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<String>,
    /// Citation labels attached to an agent reply
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            sender: USER_SENDER.to_string(),
            text: text.into(),
            timestamp: None,
            sources: Vec::new(),
        }
    }

    pub fn agent(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            sender: sender.into(),
            text: text.into(),
            timestamp: None,
            sources: Vec::new(),
        }
    }

    /// The fixed reply appended when an exchange fails.
    pub fn fallback(sender: impl Into<String>) -> Self {
        Self::agent(sender, FALLBACK_REPLY)
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Stamp the entry with the current UTC time.
    pub fn stamped(mut self) -> Self {
        self.timestamp = Some(chrono::Utc::now().to_rfc3339());
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
