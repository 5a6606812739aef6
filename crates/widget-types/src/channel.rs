use serde::{Deserialize, Serialize};

/// A simulated messaging surface. Serialized with the same lowercase tags
/// the backend receives in `ChatRequest::channel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Web,
    Sms,
    WhatsApp,
    Facebook,
    Instagram,
    /// The "powered by NeuralApps" showcase variant
    NeuralApps,
}

/// Channels the visitor may switch between at runtime
pub const TOGGLE_CHANNELS: [Channel; 2] = [Channel::Sms, Channel::WhatsApp];

impl Channel {
    pub fn all() -> &'static [Channel] {
        &[
            Channel::Web,
            Channel::Sms,
            Channel::WhatsApp,
            Channel::Facebook,
            Channel::Instagram,
            Channel::NeuralApps,
        ]
    }

    /// Wire tag sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Web => "web",
            Channel::Sms => "sms",
            Channel::WhatsApp => "whatsapp",
            Channel::Facebook => "facebook",
            Channel::Instagram => "instagram",
            Channel::NeuralApps => "neuralapps",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Web => "Web",
            Channel::Sms => "SMS",
            Channel::WhatsApp => "WhatsApp",
            Channel::Facebook => "Facebook",
            Channel::Instagram => "Instagram",
            Channel::NeuralApps => "NeuralApps",
        }
    }

    /// Parse a wire tag. Case-insensitive, surrounding whitespace ignored.
    pub fn from_tag(tag: &str) -> Option<Channel> {
        let tag = tag.trim();
        Channel::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
    }

    /// Like [`Channel::from_tag`] but total: unknown or missing tags map to `Web`.
    pub fn from_tag_or_web(tag: Option<&str>) -> Channel {
        tag.and_then(Channel::from_tag).unwrap_or_default()
    }

    pub fn is_toggleable(&self) -> bool {
        TOGGLE_CHANNELS.contains(self)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
