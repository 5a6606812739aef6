//! Channel presentation resolver.
//!
//! Maps `(channel, page_context)` to a [`ChannelStyle`]: every color, radius,
//! label and affordance the chat surface needs to impersonate a messaging
//! app. The mapping is a pure function over a closed enum, so each channel
//! has exactly one branch and adding a variant is a compile error until it
//! is styled.

use egui::{Color32, CornerRadius, Margin};
use widget_types::channel::Channel;

use crate::theme::*;

/// Page context that tints the SMS variant blue
pub const SEMINARS_CONTEXT: &str = "seminars";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Color32),
    Gradient(Gradient),
}

/// Evenly spaced color stops along `angle_deg` (CSS convention, 90 = left to right)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub angle_deg: u16,
    pub stops: &'static [Color32],
}

impl Fill {
    /// Single color standing in for the fill where a gradient can't be painted.
    pub fn base(&self) -> Color32 {
        match self {
            Fill::Solid(color) => *color,
            Fill::Gradient(g) => g
                .stops
                .get(g.stops.len() / 2)
                .copied()
                .unwrap_or(Color32::TRANSPARENT),
        }
    }
}

const NEURAL_STOPS: [Color32; 2] = [INDIGO, VIOLET];
const NEURAL_NIGHT_STOPS: [Color32; 2] = [NIGHT, NIGHT_RAISED];
const MESSENGER_STOPS: [Color32; 2] = [MESSENGER_BLUE, MESSENGER_DEEP];
const WEB_STOPS: [Color32; 3] = [Color32::WHITE, CLOUD, MIST];

const NEURAL_GRADIENT: Fill = Fill::Gradient(Gradient { angle_deg: 135, stops: &NEURAL_STOPS });
const INSTAGRAM_GRADIENT: Fill = Fill::Gradient(Gradient { angle_deg: 45, stops: &INSTAGRAM_STOPS });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Plain,
    /// WhatsApp wallpaper dots
    Dots(Color32),
    /// Faint ruled lines behind the seminars SMS thread
    Rules(Color32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watermark {
    pub text: &'static str,
    pub color: Color32,
    pub size: u8,
    pub footer: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStyle {
    pub fill: Fill,
    pub corner_radius: u8,
    pub padding: Margin,
    pub backdrop: Backdrop,
    pub watermark: Option<Watermark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// One small line of text above the thread
    Caption,
    /// App-style contact bar: avatar, name, status line
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub fill: Fill,
    pub glyph: &'static str,
    pub glyph_color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub layout: HeaderLayout,
    pub bar: Option<Fill>,
    pub divider: Option<Color32>,
    pub avatar: Option<Avatar>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub title_color: Color32,
    pub subtitle_color: Color32,
    pub uppercase: bool,
}

impl HeaderStyle {
    pub fn display_title(&self) -> String {
        if self.uppercase {
            self.title.to_uppercase()
        } else {
            self.title.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleStyle {
    pub fill: Fill,
    pub text: Color32,
    pub corners: CornerRadius,
    pub padding: Margin,
    pub border: Option<Color32>,
    pub shadow: Option<Color32>,
    /// Percent of the transcript width
    pub max_width_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptStyle {
    pub height: u16,
    pub inset: u8,
    pub sender_labels: bool,
    /// Sender labels drawn in capitals
    pub uppercase_senders: bool,
    pub time_labels: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputStyle {
    pub placeholder: &'static str,
    pub fill: Color32,
    pub text: Color32,
    pub border: Option<Color32>,
    pub corner_radius: u8,
    /// Separate strip behind the input row (Messenger, Instagram)
    pub bar: Option<Color32>,
    pub bar_divider: Option<Color32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendAffordance {
    Labeled,
    IconOnly,
}

pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "...";
pub const SEND_ICON: &str = "▶";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendStyle {
    pub affordance: SendAffordance,
    pub active_fill: Fill,
    pub active_text: Color32,
    pub disabled_fill: Color32,
    pub disabled_text: Color32,
}

impl SendStyle {
    pub fn label(&self, awaiting_reply: bool) -> &'static str {
        match self.affordance {
            SendAffordance::Labeled if awaiting_reply => SENDING_LABEL,
            SendAffordance::Labeled => SEND_LABEL,
            SendAffordance::IconOnly => SEND_ICON,
        }
    }
}

/// Full visual descriptor for one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStyle {
    pub channel: Channel,
    pub bezel: Fill,
    pub container: ContainerStyle,
    pub header: HeaderStyle,
    pub user_bubble: BubbleStyle,
    pub agent_bubble: BubbleStyle,
    pub transcript: TranscriptStyle,
    pub input: InputStyle,
    pub send: SendStyle,
}

impl ChannelStyle {
    pub fn bubble(&self, is_user: bool) -> &BubbleStyle {
        if is_user {
            &self.user_bubble
        } else {
            &self.agent_bubble
        }
    }
}

/// Resolve the descriptor for a channel on a given page.
pub fn resolve(channel: Channel, page_context: &str) -> ChannelStyle {
    match channel {
        Channel::Web => web(),
        Channel::Sms => sms(page_context == SEMINARS_CONTEXT),
        Channel::WhatsApp => whatsapp(),
        Channel::Facebook => facebook(),
        Channel::Instagram => instagram(),
        Channel::NeuralApps => neural_apps(),
    }
}

/// Resolve from a raw tag; unknown or missing tags get the web style.
pub fn resolve_tag(tag: Option<&str>, page_context: &str) -> ChannelStyle {
    resolve(Channel::from_tag_or_web(tag), page_context)
}

// CSS order is top-left, top-right, bottom-right, bottom-left
const fn corners(nw: u8, ne: u8, se: u8, sw: u8) -> CornerRadius {
    CornerRadius { nw, ne, sw, se }
}

const fn labeled(active_fill: Fill) -> SendStyle {
    SendStyle {
        affordance: SendAffordance::Labeled,
        active_fill,
        active_text: Color32::WHITE,
        disabled_fill: IDLE_FILL,
        disabled_text: IDLE_TEXT,
    }
}

const fn icon_only(active: Color32) -> SendStyle {
    SendStyle {
        affordance: SendAffordance::IconOnly,
        active_fill: Fill::Solid(active),
        active_text: Color32::WHITE,
        disabled_fill: IDLE_FILL,
        disabled_text: IDLE_TEXT,
    }
}

fn web() -> ChannelStyle {
    ChannelStyle {
        channel: Channel::Web,
        bezel: Fill::Solid(NAVY),
        container: ContainerStyle {
            fill: Fill::Gradient(Gradient { angle_deg: 135, stops: &WEB_STOPS }),
            corner_radius: 30,
            padding: Margin::symmetric(28, 35),
            backdrop: Backdrop::Plain,
            watermark: Some(Watermark {
                text: "PB",
                color: translucent(0xFF, 0xC7, 0x2C, 8),
                size: 120,
                footer: None,
            }),
        },
        header: HeaderStyle {
            layout: HeaderLayout::Caption,
            bar: None,
            divider: None,
            avatar: None,
            title: "AI Agent",
            subtitle: None,
            title_color: MUTED,
            subtitle_color: MUTED,
            uppercase: true,
        },
        user_bubble: BubbleStyle {
            fill: Fill::Solid(GOLD),
            text: NAVY,
            corners: corners(18, 18, 4, 18),
            padding: Margin::symmetric(20, 14),
            border: None,
            shadow: Some(translucent(0xFF, 0xC7, 0x2C, 64)),
            max_width_pct: 80,
        },
        agent_bubble: BubbleStyle {
            fill: Fill::Solid(CLOUD),
            text: SLATE,
            corners: corners(18, 18, 18, 4),
            padding: Margin::symmetric(20, 14),
            border: None,
            shadow: None,
            max_width_pct: 80,
        },
        transcript: TranscriptStyle {
            height: 480,
            inset: 0,
            sender_labels: true,
            uppercase_senders: true,
            time_labels: false,
        },
        input: InputStyle {
            placeholder: "Ask me anything...",
            fill: Color32::WHITE,
            text: SLATE,
            border: Some(Color32::from_rgb(0xDD, 0xDD, 0xDD)),
            corner_radius: 20,
            bar: None,
            bar_divider: None,
        },
        send: labeled(Fill::Solid(GOLD)),
    }
}

fn neural_apps() -> ChannelStyle {
    ChannelStyle {
        channel: Channel::NeuralApps,
        bezel: NEURAL_GRADIENT,
        container: ContainerStyle {
            fill: Fill::Gradient(Gradient { angle_deg: 135, stops: &NEURAL_NIGHT_STOPS }),
            corner_radius: 20,
            padding: Margin::same(20),
            backdrop: Backdrop::Plain,
            watermark: Some(Watermark {
                text: "NEURAL\nAPPS",
                color: translucent(0x63, 0x66, 0xF1, 20),
                size: 80,
                footer: Some("POWERED BY NEURALAPPS.AI"),
            }),
        },
        header: HeaderStyle {
            layout: HeaderLayout::Caption,
            bar: None,
            divider: None,
            avatar: None,
            title: "NeuralApps.ai Powered",
            subtitle: None,
            title_color: STEEL,
            subtitle_color: STEEL,
            uppercase: true,
        },
        user_bubble: BubbleStyle {
            fill: NEURAL_GRADIENT,
            text: Color32::WHITE,
            corners: corners(16, 16, 4, 16),
            padding: Margin::symmetric(16, 10),
            border: None,
            shadow: Some(translucent(0x63, 0x66, 0xF1, 77)),
            max_width_pct: 80,
        },
        agent_bubble: BubbleStyle {
            fill: Fill::Solid(translucent(0x94, 0xA3, 0xB8, 26)),
            text: FROST,
            corners: corners(16, 16, 16, 4),
            padding: Margin::symmetric(16, 10),
            border: Some(translucent(0x94, 0xA3, 0xB8, 51)),
            shadow: None,
            max_width_pct: 80,
        },
        transcript: TranscriptStyle {
            height: 450,
            inset: 0,
            sender_labels: false,
            uppercase_senders: false,
            time_labels: true,
        },
        input: InputStyle {
            placeholder: "Ask me anything...",
            fill: translucent(0x0F, 0x17, 0x2A, 128),
            text: FROST,
            border: Some(translucent(0x94, 0xA3, 0xB8, 77)),
            corner_radius: 20,
            bar: None,
            bar_divider: None,
        },
        send: labeled(NEURAL_GRADIENT),
    }
}

fn instagram() -> ChannelStyle {
    ChannelStyle {
        channel: Channel::Instagram,
        bezel: INSTAGRAM_GRADIENT,
        container: ContainerStyle {
            fill: Fill::Solid(Color32::WHITE),
            corner_radius: 20,
            padding: Margin::ZERO,
            backdrop: Backdrop::Plain,
            watermark: None,
        },
        header: HeaderStyle {
            layout: HeaderLayout::Contact,
            bar: Some(Fill::Solid(Color32::WHITE)),
            divider: Some(INSTAGRAM_LINE),
            avatar: Some(Avatar {
                fill: INSTAGRAM_GRADIENT,
                glyph: "PB",
                glyph_color: Color32::WHITE,
            }),
            title: "provisionbrokerage",
            subtitle: Some("Active now"),
            title_color: Color32::from_rgb(0x26, 0x26, 0x26),
            subtitle_color: Color32::from_rgb(0x8E, 0x8E, 0x8E),
            uppercase: false,
        },
        user_bubble: BubbleStyle {
            fill: Fill::Solid(INSTAGRAM_BLUE),
            text: Color32::WHITE,
            corners: CornerRadius::same(20),
            padding: Margin::symmetric(16, 10),
            border: None,
            shadow: None,
            max_width_pct: 75,
        },
        agent_bubble: BubbleStyle {
            fill: Fill::Solid(Color32::from_rgb(0xEF, 0xEF, 0xEF)),
            text: Color32::BLACK,
            corners: CornerRadius::same(20),
            padding: Margin::symmetric(16, 10),
            border: Some(INSTAGRAM_LINE),
            shadow: None,
            max_width_pct: 75,
        },
        transcript: TranscriptStyle {
            height: 430,
            inset: 16,
            sender_labels: false,
            uppercase_senders: false,
            time_labels: true,
        },
        input: InputStyle {
            placeholder: "Message...",
            fill: Color32::WHITE,
            text: Color32::from_rgb(0x26, 0x26, 0x26),
            border: Some(INSTAGRAM_LINE),
            corner_radius: 22,
            bar: Some(Color32::WHITE),
            bar_divider: Some(INSTAGRAM_LINE),
        },
        send: labeled(Fill::Solid(INSTAGRAM_BLUE)),
    }
}

fn facebook() -> ChannelStyle {
    ChannelStyle {
        channel: Channel::Facebook,
        bezel: Fill::Solid(MESSENGER_BLUE),
        container: ContainerStyle {
            fill: Fill::Solid(Color32::WHITE),
            corner_radius: 20,
            padding: Margin::ZERO,
            backdrop: Backdrop::Plain,
            watermark: None,
        },
        header: HeaderStyle {
            layout: HeaderLayout::Contact,
            bar: Some(Fill::Gradient(Gradient { angle_deg: 90, stops: &MESSENGER_STOPS })),
            divider: None,
            avatar: Some(Avatar {
                fill: Fill::Solid(Color32::WHITE),
                glyph: "PB",
                glyph_color: MESSENGER_BLUE,
            }),
            title: "ProVision Brokerage",
            subtitle: Some("Typically replies instantly"),
            title_color: Color32::WHITE,
            subtitle_color: translucent(0xFF, 0xFF, 0xFF, 230),
            uppercase: false,
        },
        user_bubble: BubbleStyle {
            fill: Fill::Solid(MESSENGER_BLUE),
            text: Color32::WHITE,
            corners: CornerRadius::same(18),
            padding: Margin::symmetric(16, 10),
            border: None,
            shadow: None,
            max_width_pct: 75,
        },
        agent_bubble: BubbleStyle {
            fill: Fill::Solid(Color32::from_rgb(0xF0, 0xF0, 0xF0)),
            text: Color32::BLACK,
            corners: CornerRadius::same(18),
            padding: Margin::symmetric(16, 10),
            border: None,
            shadow: None,
            max_width_pct: 75,
        },
        transcript: TranscriptStyle {
            height: 430,
            inset: 16,
            sender_labels: false,
            uppercase_senders: false,
            time_labels: true,
        },
        input: InputStyle {
            placeholder: "Aa",
            fill: Color32::from_rgb(0xF4, 0xF4, 0xF4),
            text: Color32::BLACK,
            border: None,
            corner_radius: 20,
            bar: Some(Color32::WHITE),
            bar_divider: Some(INSTAGRAM_LINE),
        },
        send: labeled(Fill::Solid(MESSENGER_BLUE)),
    }
}

fn sms(seminars: bool) -> ChannelStyle {
    let accent_or = |plain: Color32| if seminars { IMESSAGE_BLUE } else { plain };

    ChannelStyle {
        channel: Channel::Sms,
        bezel: Fill::Solid(NAVY),
        container: ContainerStyle {
            fill: Fill::Solid(if seminars {
                Color32::from_rgb(0xE8, 0xF4, 0xFF)
            } else {
                Color32::from_rgb(0xF0, 0xF0, 0xF0)
            }),
            corner_radius: 20,
            padding: Margin::symmetric(16, 20),
            backdrop: if seminars {
                Backdrop::Rules(translucent(0x00, 0x7A, 0xFF, 20))
            } else {
                Backdrop::Plain
            },
            watermark: None,
        },
        header: HeaderStyle {
            layout: HeaderLayout::Contact,
            bar: None,
            divider: Some(accent_or(Color32::from_rgb(0xDD, 0xDD, 0xDD))),
            avatar: None,
            title: "Sarah (ProVision)",
            subtitle: None,
            title_color: accent_or(Color32::from_rgb(0x33, 0x33, 0x33)),
            subtitle_color: Color32::from_rgb(0x66, 0x66, 0x66),
            uppercase: false,
        },
        user_bubble: BubbleStyle {
            fill: Fill::Solid(IMESSAGE_BLUE),
            text: Color32::WHITE,
            corners: corners(18, 18, 4, 18),
            padding: Margin::symmetric(14, 10),
            border: None,
            shadow: None,
            max_width_pct: 75,
        },
        agent_bubble: BubbleStyle {
            fill: Fill::Solid(if seminars { Color32::WHITE } else { SMS_GREY }),
            text: Color32::BLACK,
            corners: corners(18, 18, 18, 4),
            padding: Margin::symmetric(14, 10),
            border: None,
            shadow: seminars.then_some(translucent(0x00, 0x7A, 0xFF, 26)),
            max_width_pct: 75,
        },
        transcript: TranscriptStyle {
            height: 450,
            inset: 0,
            sender_labels: false,
            uppercase_senders: false,
            time_labels: true,
        },
        input: InputStyle {
            placeholder: "Text message",
            fill: Color32::WHITE,
            text: Color32::BLACK,
            border: Some(accent_or(Color32::from_rgb(0xCC, 0xCC, 0xCC))),
            corner_radius: 20,
            bar: None,
            bar_divider: None,
        },
        send: icon_only(IMESSAGE_BLUE),
    }
}

fn whatsapp() -> ChannelStyle {
    let bubble_shadow = Some(translucent(0x00, 0x00, 0x00, 26));

    ChannelStyle {
        channel: Channel::WhatsApp,
        bezel: Fill::Solid(WHATSAPP_TEAL),
        container: ContainerStyle {
            fill: Fill::Solid(WHATSAPP_PAPER),
            corner_radius: 20,
            padding: Margin::symmetric(16, 20),
            backdrop: Backdrop::Dots(translucent(0xD9, 0xD9, 0xD9, 77)),
            watermark: None,
        },
        header: HeaderStyle {
            layout: HeaderLayout::Contact,
            bar: Some(Fill::Solid(WHATSAPP_TEAL)),
            divider: None,
            avatar: Some(Avatar {
                fill: Fill::Solid(Color32::WHITE),
                glyph: "PB",
                glyph_color: WHATSAPP_GREEN,
            }),
            title: "Sarah - ProVision",
            subtitle: Some("Online"),
            title_color: Color32::WHITE,
            subtitle_color: translucent(0xFF, 0xFF, 0xFF, 204),
            uppercase: false,
        },
        user_bubble: BubbleStyle {
            fill: Fill::Solid(WHATSAPP_BUBBLE),
            text: Color32::BLACK,
            corners: corners(8, 8, 0, 8),
            padding: Margin::symmetric(12, 8),
            border: None,
            shadow: bubble_shadow,
            max_width_pct: 75,
        },
        agent_bubble: BubbleStyle {
            fill: Fill::Solid(Color32::WHITE),
            text: Color32::BLACK,
            corners: corners(8, 8, 8, 0),
            padding: Margin::symmetric(12, 8),
            border: None,
            shadow: bubble_shadow,
            max_width_pct: 75,
        },
        transcript: TranscriptStyle {
            height: 450,
            inset: 0,
            sender_labels: false,
            uppercase_senders: false,
            time_labels: true,
        },
        input: InputStyle {
            placeholder: "Type a message",
            fill: Color32::WHITE,
            text: Color32::BLACK,
            border: None,
            corner_radius: 20,
            bar: None,
            bar_divider: None,
        },
        send: icon_only(WHATSAPP_GREEN),
    }
}
