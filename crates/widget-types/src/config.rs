use serde::{Deserialize, Serialize};
use crate::channel::Channel;
use crate::message::AGENT_SENDER;

pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
pub const HOSTED_BASE_URL: &str = "https://provision-brokerage-1.onrender.com";

pub const DEFAULT_PAGE_CONTEXT: &str = "home";
pub const DEFAULT_GREETING: &str = "Hi. I'm Sarah from ProVision Brokerage, how can I help you?";

pub const ATTR_PAGE_CONTEXT: &str = "data-page-context";
pub const ATTR_INITIAL_MESSAGE: &str = "data-initial-message";
pub const ATTR_SHOW_CHANNEL_TOGGLE: &str = "data-show-channel-toggle";
pub const ATTR_CHANNEL_MODE: &str = "data-channel-mode";
pub const ATTR_WIDGET_CONFIG: &str = "data-widget-config";

const ASSISTANT_PAGE_AGENT: &str = "Sarah - ProVision Brokerage";
const ASSISTANT_PAGE_PLACEHOLDER: &str =
    "Ask me about retirement planning, annuities, or book a consultation...";
const ASSISTANT_PAGE_GREETING: &str = "Hi! I'm Sarah from ProVision Brokerage. I'm here to help you \
with retirement planning, annuities, and booking consultations with our advisors. \
What's on your mind today?";

/// Top-level widget configuration, resolved once by the hosting process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// `None` lets the host resolve the backend from the page hostname
    pub api: Option<ApiConfig>,
    pub mount: MountOptions,
}

/// Where the chat backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: HOSTED_BASE_URL.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Pick the backend for the page's hostname: a local dev server when the
    /// page itself is served from localhost, the hosted API otherwise.
    pub fn for_hostname(hostname: &str) -> Self {
        let base_url = match Deployment::from_hostname(hostname) {
            Deployment::Local => LOCAL_BASE_URL,
            Deployment::Hosted => HOSTED_BASE_URL,
        };
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Join an API path onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Hosted,
}

impl Deployment {
    pub fn from_hostname(hostname: &str) -> Self {
        if hostname.eq_ignore_ascii_case("localhost") {
            Deployment::Local
        } else {
            Deployment::Hosted
        }
    }
}

/// What the host page supplies when it mounts a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountOptions {
    pub page_context: String,
    pub initial_message: String,
    pub show_channel_toggle: bool,
    /// Explicit channel; `None` lets [`MountOptions::initial_channel`] decide
    pub channel_mode: Option<Channel>,
    /// Sender label for agent replies and the fallback
    pub agent_name: String,
    /// Sender label for the seeded greeting; `None` uses `agent_name`
    pub greeting_sender: Option<String>,
    /// Replaces the channel's input placeholder
    pub placeholder: Option<String>,
    pub timestamps: bool,
    pub show_sources: bool,
    pub session_prefix: String,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            page_context: DEFAULT_PAGE_CONTEXT.to_string(),
            initial_message: DEFAULT_GREETING.to_string(),
            show_channel_toggle: false,
            channel_mode: None,
            agent_name: AGENT_SENDER.to_string(),
            greeting_sender: None,
            placeholder: None,
            timestamps: false,
            show_sources: false,
            session_prefix: "widget".to_string(),
        }
    }
}

impl MountOptions {
    /// The full-page assistant: web channel, timestamped entries, citations.
    pub fn assistant_page() -> Self {
        Self {
            initial_message: ASSISTANT_PAGE_GREETING.to_string(),
            channel_mode: Some(Channel::Web),
            greeting_sender: Some(ASSISTANT_PAGE_AGENT.to_string()),
            placeholder: Some(ASSISTANT_PAGE_PLACEHOLDER.to_string()),
            timestamps: true,
            show_sources: true,
            session_prefix: "session".to_string(),
            ..Self::default()
        }
    }

    /// Build options from the host element's `data-*` attributes. Missing
    /// attributes keep their defaults; an unknown channel mode is ignored.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(page) = attr(ATTR_PAGE_CONTEXT).filter(|p| !p.trim().is_empty()) {
            options.page_context = page.trim().to_string();
        }
        if let Some(message) = attr(ATTR_INITIAL_MESSAGE).filter(|m| !m.is_empty()) {
            options.initial_message = message;
        }
        if let Some(flag) = attr(ATTR_SHOW_CHANNEL_TOGGLE) {
            options.show_channel_toggle = parse_flag(&flag);
        }
        if let Some(tag) = attr(ATTR_CHANNEL_MODE) {
            options.channel_mode = Channel::from_tag(&tag);
        }
        options
    }

    pub fn greeting_sender(&self) -> &str {
        self.greeting_sender.as_deref().unwrap_or(&self.agent_name)
    }

    /// Explicit mode wins; otherwise SMS when the toggle is shown, web when not.
    pub fn initial_channel(&self) -> Channel {
        match self.channel_mode {
            Some(channel) => channel,
            None if self.show_channel_toggle => Channel::Sms,
            None => Channel::Web,
        }
    }
}

impl WidgetConfig {
    /// Read the whole contract from an element. A JSON `data-widget-config`
    /// takes precedence over the individual attributes.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        match attr(ATTR_WIDGET_CONFIG) {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Self {
                api: None,
                mount: MountOptions::from_attributes(attr),
            }),
        }
    }
}

/// HTML boolean attribute: present and not "false"/"0" means on.
fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}
